// ============================================================================
// ROUTER - Páginas, historial del navegador y renders asíncronos
// ============================================================================
// Cada navegación incrementa la generación de render. Un fetch que termina
// después de una navegación más reciente se descarta.
// ============================================================================

use std::rc::{Rc, Weak};
use wasm_bindgen::JsValue;
use crate::dom::Dom;
use crate::models::{BillFilter, User};
use crate::services::Store;
use crate::state::NavigationState;
use crate::utils::{load_user, KeyValueStorage, LOGIN_BACKGROUND, ROOT_SELECTOR};
use crate::viewmodels::{
    get_bills, get_bills_all_users, BillsViewModel, DashboardViewModel, LoginViewModel, NewBillViewModel,
    PageContext, Spawner,
};
use crate::views::{render_bills, render_dashboard, render_login, render_new_bill, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }

    /// Rutas desconocidas -> Login
    pub fn from_path(path: &str) -> Route {
        match path {
            "#employee/bills" => Route::Bills,
            "#employee/bill/new" => Route::NewBill,
            "#admin/dashboard" => Route::Dashboard,
            _ => Route::Login,
        }
    }
}

/// Historial del navegador
pub trait History {
    fn push_state(&self, path: &str);

    /// `location.hash`, o `location.pathname` si no hay hash
    fn current_path(&self) -> String;

    fn pathname(&self) -> String;
}

pub struct BrowserHistory;

impl History for BrowserHistory {
    fn push_state(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let origin = window.location().origin().unwrap_or_default();
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, path, Some(&format!("{}{}", origin, path))));
        if let Err(e) = pushed {
            log::warn!("⚠️ [ROUTER] pushState falló para {}: {:?}", path, e);
        }
    }

    fn current_path(&self) -> String {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return String::new();
        };
        match location.hash() {
            Ok(hash) if !hash.is_empty() => hash,
            _ => location.pathname().unwrap_or_default(),
        }
    }

    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }
}

struct RouterInner {
    dom: Rc<dyn Dom>,
    storage: Rc<dyn KeyValueStorage>,
    store: Option<Rc<dyn Store>>,
    history: Rc<dyn History>,
    spawner: Spawner,
    navigation: NavigationState,
    test_accounts: Vec<String>,
}

#[derive(Clone)]
pub struct Router {
    inner: Rc<RouterInner>,
}

impl Router {
    pub fn new(
        dom: Rc<dyn Dom>,
        storage: Rc<dyn KeyValueStorage>,
        store: Option<Rc<dyn Store>>,
        history: Rc<dyn History>,
        spawner: Spawner,
        test_accounts: Vec<String>,
    ) -> Self {
        Self {
            inner: Rc::new(RouterInner {
                dom,
                storage,
                store,
                history,
                spawner,
                navigation: NavigationState::new(),
                test_accounts,
            }),
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.inner.navigation
    }

    fn viewer(&self) -> Option<User> {
        load_user(&*self.inner.storage)
    }

    /// Contexto que reciben los controladores; su navegación vuelve al router
    fn context(&self) -> PageContext {
        let router: Weak<RouterInner> = Rc::downgrade(&self.inner);
        PageContext {
            dom: self.inner.dom.clone(),
            storage: self.inner.storage.clone(),
            store: self.inner.store.clone(),
            on_navigate: Rc::new(move |route| {
                if let Some(inner) = router.upgrade() {
                    Router { inner }.go(route);
                }
            }),
            spawner: self.inner.spawner.clone(),
        }
    }

    /// Navegación lanzada en el event loop
    pub fn go(&self, route: Route) {
        let router = self.clone();
        (self.inner.spawner)(Box::pin(async move { router.navigate(route).await }));
    }

    pub async fn navigate(&self, route: Route) {
        log::info!("🧭 [ROUTER] Navegando a {}", route.path());
        self.inner.history.push_state(route.path());
        let generation = self.inner.navigation.next_generation();
        match route {
            Route::Login => self.render_login(),
            Route::NewBill => self.render_new_bill(),
            Route::Bills => self.render_bills(generation).await,
            Route::Dashboard => self.render_dashboard(generation).await,
        }
    }

    fn set_root(&self, html: &str) {
        if let Err(e) = self.inner.dom.set_inner_html(ROOT_SELECTOR, html) {
            log::error!("❌ [ROUTER] No se pudo pintar la página: {}", e);
        }
    }

    fn render_login(&self) {
        self.set_root(&render_login());
        self.inner.dom.set_body_background(LOGIN_BACKGROUND);
        if let Err(e) = LoginViewModel::new(self.context(), self.inner.navigation.clone()).init() {
            log::error!("❌ [ROUTER] Login sin formularios: {}", e);
        }
    }

    fn render_new_bill(&self) {
        self.set_root(&render_new_bill(self.viewer().as_ref()));
        self.set_active_icon(Route::NewBill);
        if let Err(e) = NewBillViewModel::new(self.context()).init() {
            log::error!("❌ [ROUTER] NewBill sin formulario: {}", e);
        }
    }

    fn is_stale(&self, generation: u64, route: Route) -> bool {
        let stale = !self.inner.navigation.is_current(generation);
        if stale {
            log::debug!("⏭️ [ROUTER] Respuesta descartada para {} (navegación más reciente)", route.path());
        }
        stale
    }

    async fn render_bills(&self, generation: u64) {
        let viewer = self.viewer();
        self.set_root(&render_bills(ViewState::Loading, viewer.as_ref()));
        self.set_active_icon(Route::Bills);

        let result = get_bills(self.inner.store.as_deref()).await;
        if self.is_stale(generation, Route::Bills) {
            return;
        }
        match result {
            Ok(rows) => {
                self.set_root(&render_bills(ViewState::Ready(&rows), viewer.as_ref()));
                self.set_active_icon(Route::Bills);
                if let Err(e) = BillsViewModel::new(self.context()).init() {
                    log::error!("❌ [ROUTER] Bills sin controles: {}", e);
                }
            }
            Err(e) => self.set_root(&render_bills(ViewState::Error(e.to_string()), viewer.as_ref())),
        }
    }

    async fn render_dashboard(&self, generation: u64) {
        let viewer = self.viewer();
        let filter = BillFilter::for_viewer(
            viewer.as_ref().map(|user| user.email.as_str()).unwrap_or_default(),
            &self.inner.test_accounts,
        );
        self.set_root(&render_dashboard(ViewState::Loading, &filter, viewer.as_ref()));

        let result = get_bills_all_users(self.inner.store.as_deref()).await;
        if self.is_stale(generation, Route::Dashboard) {
            return;
        }
        match result {
            Ok(bills) => {
                self.set_root(&render_dashboard(ViewState::Ready(&bills), &filter, viewer.as_ref()));
                if let Err(e) = DashboardViewModel::new(self.context(), bills, filter).init() {
                    log::error!("❌ [ROUTER] Dashboard sin controles: {}", e);
                }
            }
            Err(e) => {
                log::error!("❌ [ROUTER] Error cargando dashboard: {}", e);
                self.set_root(&render_dashboard(ViewState::Error(e.to_string()), &filter, viewer.as_ref()));
            }
        }
    }

    /// Marca el icono de la página actual en la barra lateral
    pub fn set_active_icon(&self, route: Route) {
        let dom = &self.inner.dom;
        if !dom.exists("#layout-icon1") || !dom.exists("#layout-icon2") {
            return;
        }
        let (active, inactive) = match route {
            Route::NewBill => ("#layout-icon2", "#layout-icon1"),
            _ => ("#layout-icon1", "#layout-icon2"),
        };
        let result = dom
            .add_class(active, "active-icon")
            .and_then(|_| dom.remove_class(inactive, "active-icon"));
        if let Err(e) = result {
            log::warn!("⚠️ [ROUTER] No se pudo marcar el icono activo: {}", e);
        }
    }

    /// Login sin pasar por el historial (sin push)
    fn show_login(&self) {
        self.inner.navigation.next_generation();
        self.render_login();
    }

    /// Botón "atrás" del navegador
    pub fn handle_pop_state(&self) {
        let user = self.viewer();
        if self.inner.history.pathname() == "/" && user.is_none() {
            self.show_login();
        } else if user.is_some() {
            let previous = self.inner.navigation.previous_location().unwrap_or(Route::Login);
            self.go(previous);
        }
    }

    /// Primera página según la URL de carga
    pub fn start(&self) {
        let path = self.inner.history.current_path();
        if path.starts_with('#') {
            self.go(Route::from_path(&path));
        } else {
            self.show_login();
        }
    }
}
