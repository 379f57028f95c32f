// ============================================================================
// VIEWMODELS - Controladores de página (listeners + llamadas al store)
// ============================================================================
// Cada página recibe sus colaboradores en un `PageContext`; ninguno es global.
// ============================================================================

pub mod bills_viewmodel;
pub mod dashboard_viewmodel;
pub mod login_viewmodel;
pub mod logout;
pub mod new_bill_viewmodel;

use std::future::Future;
use std::rc::Rc;
use futures::future::LocalBoxFuture;
use crate::dom::Dom;
use crate::models::User;
use crate::router::Route;
use crate::services::Store;
use crate::utils::{load_user, KeyValueStorage};

pub use bills_viewmodel::{get_bills, BillsViewModel};
pub use dashboard_viewmodel::{get_bills_all_users, update_bill, DashboardViewModel};
pub use login_viewmodel::LoginViewModel;
pub use logout::bind_logout;
pub use new_bill_viewmodel::{is_valid_receipt, NewBillViewModel, INVALID_FILE_MESSAGE};

/// Callback de navegación que entrega el router
pub type Navigate = Rc<dyn Fn(Route)>;

/// Lanza un future `!Send` en el event loop
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Spawner del navegador (`spawn_local`)
pub fn browser_spawner() -> Spawner {
    Rc::new(|future| wasm_bindgen_futures::spawn_local(future))
}

#[derive(Clone)]
pub struct PageContext {
    pub dom: Rc<dyn Dom>,
    pub storage: Rc<dyn KeyValueStorage>,
    pub store: Option<Rc<dyn Store>>,
    pub on_navigate: Navigate,
    pub spawner: Spawner,
}

impl PageContext {
    pub fn navigate(&self, route: Route) {
        (self.on_navigate)(route)
    }

    pub fn spawn(&self, future: impl Future<Output = ()> + 'static) {
        (self.spawner)(Box::pin(future))
    }

    /// Usuario de la sesión guardado en localStorage
    pub fn viewer(&self) -> Option<User> {
        load_user(&*self.storage)
    }

    pub fn viewer_email(&self) -> String {
        self.viewer().map(|user| user.email).unwrap_or_default()
    }
}
