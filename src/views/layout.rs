// ============================================================================
// LAYOUT - Barra vertical, páginas de carga/error y acciones de fila
// ============================================================================

use crate::models::{User, UserType};
use crate::views::{escape_html, icons};

/// Barra de navegación vertical. Los iconos de página solo para empleados.
pub fn render_vertical_layout(height_vh: u32, viewer: Option<&User>) -> String {
    let page_icons = match viewer {
        Some(user) if user.user_type == UserType::Employee => format!(
            r#"<div id="layout-icon1" data-testid="icon-window">{}</div>
        <div id="layout-icon2" data-testid="icon-mail">{}</div>"#,
            icons::WINDOW,
            icons::MAIL
        ),
        _ => String::new(),
    };
    format!(
        r#"<div class="vertical-navbar" style="height: {height_vh}vh;">
        <div class="layout-title"><span class="layout-title-first">Bill</span><span class="layout-title-second">ed</span></div>
        {page_icons}
        <div id="layout-disconnect" data-testid="layout-disconnect">{disconnect}</div>
      </div>"#,
        disconnect = icons::DISCONNECT,
    )
}

pub fn render_loading_page() -> String {
    r#"<div id="loading">Loading...</div>"#.to_string()
}

pub fn render_error_page(error: &str, viewer: Option<&User>) -> String {
    format!(
        r#"<div class="layout">
      {layout}
      <div class="content" id="error-page">
        <div class="content-header">
          <div class="content-title">Erreur</div>
        </div>
        <div data-testid="error-message">{message}</div>
      </div>
    </div>"#,
        layout = render_vertical_layout(120, viewer),
        message = escape_html(error),
    )
}

/// Icono "oeil" de una fila; sin URL no lleva `data-bill-url`
pub fn render_actions(file_url: Option<&str>) -> String {
    let url_attr = file_url
        .map(|url| format!(r#" data-bill-url="{}""#, escape_html(url)))
        .unwrap_or_default();
    format!(
        r#"<div class="icon-actions"><div id="eye" data-testid="icon-eye"{url_attr}>{icon}</div></div>"#,
        icon = icons::EYE_BLUE,
    )
}
