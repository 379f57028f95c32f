use crate::dom::{listener, DomError, EventKind};
use crate::router::Route;
use crate::utils::LOGIN_BACKGROUND;
use crate::viewmodels::PageContext;

pub const LOGOUT_SELECTOR: &str = "#layout-disconnect";

/// Cerrar sesión: vaciar localStorage y volver al login
pub fn logout(ctx: &PageContext) {
    log::info!("🚪 [LOGOUT] Cerrando sesión");
    ctx.storage.clear();
    ctx.navigate(Route::Login);
    ctx.dom.set_body_background(LOGIN_BACKGROUND);
}

/// Enlazar el botón de desconexión de la barra lateral (si está en la página)
pub fn bind_logout(ctx: &PageContext) -> Result<usize, DomError> {
    let page = ctx.clone();
    ctx.dom.listen(LOGOUT_SELECTOR, EventKind::Click, listener(move |_| logout(&page)))
}
