// ============================================================================
// DASHBOARD STATE - Contadores de listas desplegables + edición de ticket
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::BillStatus;

/// Qué hacer con una lista de estado al hacer click en su flecha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListToggle {
    Expand,
    Collapse,
}

/// Qué mostrar en el panel derecho al hacer click en un ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditToggle {
    ShowForm,
    ShowPlaceholder,
}

#[derive(Debug, Default)]
struct Inner {
    // Un contador por lista (pending, accepted, refused)
    list_counters: [u32; 3],
    edit_counter: Option<u32>,
    edit_id: Option<String>,
}

/// Estado de una instancia del dashboard
#[derive(Clone, Default)]
pub struct DashboardState {
    inner: Rc<RefCell<Inner>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Volver al estado inicial (todas las listas cerradas, sin ticket abierto)
    pub fn reset(&self) {
        *self.inner.borrow_mut() = Inner::default();
    }

    /// Par = cerrada -> abrir; impar = abierta -> cerrar. Incrementa el contador.
    pub fn toggle_list(&self, status: BillStatus) -> ListToggle {
        let mut inner = self.inner.borrow_mut();
        let counter = &mut inner.list_counters[status.index() as usize - 1];
        let action = if *counter % 2 == 0 {
            ListToggle::Expand
        } else {
            ListToggle::Collapse
        };
        *counter += 1;
        action
    }

    pub fn is_list_open(&self, status: BillStatus) -> bool {
        self.inner.borrow().list_counters[status.index() as usize - 1] % 2 == 1
    }

    /// Alterna formulario / icono para `bill_id`. Cambiar de ticket reinicia el ciclo.
    pub fn toggle_edit(&self, bill_id: &str) -> EditToggle {
        let mut inner = self.inner.borrow_mut();
        if inner.edit_id.as_deref() != Some(bill_id) {
            inner.edit_counter = None;
            inner.edit_id = Some(bill_id.to_string());
        }
        let counter = inner.edit_counter.get_or_insert(0);
        let action = if *counter % 2 == 0 {
            EditToggle::ShowForm
        } else {
            EditToggle::ShowPlaceholder
        };
        *counter += 1;
        action
    }

    pub fn edit_id(&self) -> Option<String> {
        self.inner.borrow().edit_id.clone()
    }
}
