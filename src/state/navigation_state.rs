// ============================================================================
// NAVIGATION STATE - Última ubicación autenticada + generación de render
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::router::Route;

#[derive(Clone, Default)]
pub struct NavigationState {
    previous_location: Rc<RefCell<Option<Route>>>,
    generation: Rc<Cell<u64>>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_previous_location(&self, route: Route) {
        *self.previous_location.borrow_mut() = Some(route);
    }

    pub fn previous_location(&self) -> Option<Route> {
        *self.previous_location.borrow()
    }

    /// Nueva navegación: invalida los renders asíncronos anteriores
    pub fn next_generation(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}
