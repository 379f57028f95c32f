// ============================================================================
// BILLED - NOTES DE FRAIS (RUST PURO + WEBASSEMBLY)
// ============================================================================
// - Views: funciones que devuelven markup (sin lógica)
// - ViewModels: controladores de página (listeners + store)
// - Router: páginas, historial y renders asíncronos
// - Services: SOLO comunicación con el store
// - State: estado por instancia con Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global de la app
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Billed - {} ({})", env!("CARGO_PKG_VERSION"), CONFIG.environment);

    let app = App::new();
    app.start()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Navegación llamable desde JavaScript (`onNavigate("#employee/bills")`)
#[wasm_bindgen(js_name = onNavigate)]
pub fn on_navigate(path: &str) {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => app.navigate(path),
        None => log::warn!("⚠️ [MAIN] App no está inicializada"),
    });
}
