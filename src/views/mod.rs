pub mod bills;
pub mod dashboard;
pub mod dashboard_form;
pub mod icons;
pub mod layout;
pub mod login;
pub mod new_bill;

pub use bills::{render_bill_proof, render_bills, sort_rows};
pub use dashboard::{render_admin_receipt, render_big_billed_icon, render_card, render_cards, render_dashboard, NO_RECEIPT_MESSAGE};
pub use dashboard_form::render_dashboard_form;
pub use layout::{render_error_page, render_loading_page, render_vertical_layout};
pub use login::render_login;
pub use new_bill::render_new_bill;

/// Estado de una página que depende de datos remotos
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Ready(T),
}

/// Escapa texto antes de insertarlo en markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b a="1">&'"#), "&lt;b a=&quot;1&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("Hôtel et logement"), "Hôtel et logement");
    }
}
