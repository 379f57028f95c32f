// ============================================================================
// APP - Construye los colaboradores del navegador y arranca el router
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::config::CONFIG;
use crate::dom::WebDom;
use crate::router::{BrowserHistory, Route, Router};
use crate::services::{HttpStore, Store};
use crate::utils::{BrowserStorage, KeyValueStorage};
use crate::viewmodels::browser_spawner;

/// Aplicación principal
pub struct App {
    router: Router,
}

impl App {
    pub fn new() -> Self {
        let storage: Rc<dyn KeyValueStorage> = Rc::new(BrowserStorage);
        let store: Rc<dyn Store> = Rc::new(HttpStore::new(storage.clone()));
        log::info!("🌐 [APP] Store en {}", CONFIG.api_url);

        let router = Router::new(
            Rc::new(WebDom::new()),
            storage,
            Some(store),
            Rc::new(BrowserHistory),
            browser_spawner(),
            CONFIG.test_accounts.clone(),
        );
        Self { router }
    }

    /// Registrar `popstate` y pintar la primera página
    pub fn start(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

        // Listener global: se registra UNA VEZ, forget() no acumula closures
        let router = self.router.clone();
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            router.handle_pop_state();
        }) as Box<dyn FnMut(web_sys::Event)>);
        window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        closure.forget();

        self.router.start();
        Ok(())
    }

    pub fn navigate(&self, path: &str) {
        self.router.go(Route::from_path(path));
    }
}
