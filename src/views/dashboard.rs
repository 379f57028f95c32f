// ============================================================================
// DASHBOARD VIEW - Listas por estado + panel de revisión del admin
// ============================================================================

use crate::models::{filtered_bills, Bill, BillFilter, BillStatus, User};
use crate::utils::format_date;
use crate::views::layout::{render_error_page, render_loading_page, render_vertical_layout};
use crate::views::{escape_html, icons, ViewState};

pub const NO_RECEIPT_MESSAGE: &str = "Aucun justificatif disponible.";

fn list_title(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Validé",
        BillStatus::Refused => "Refusé",
    }
}

/// Fecha de la card; si no se puede interpretar se muestra tal cual
fn card_date(raw: &str) -> String {
    format_date(raw).unwrap_or_else(|_| raw.to_string())
}

pub fn render_card(bill: &Bill) -> String {
    let (first_name, last_name) = bill.owner_names();
    format!(
        r#"<div class="bill-card" id="open-bill{id}" data-testid="open-bill{id}">
        <div class="bill-card-name-container">
          <div class="bill-card-name"> {first_name} {last_name} </div>
          <span class="bill-card-grey"> ... </span>
        </div>
        <div class="name-price-container">
          <span> {name} </span>
          <span> {amount} € </span>
        </div>
        <div class="date-type-container">
          <span> {date} </span>
          <span> {expense_type} </span>
        </div>
      </div>"#,
        id = escape_html(bill.id()),
        first_name = escape_html(&first_name),
        last_name = escape_html(&last_name),
        name = escape_html(&bill.name),
        amount = bill.amount_label(),
        date = escape_html(&card_date(&bill.date)),
        expense_type = escape_html(&bill.expense_type),
    )
}

pub fn render_cards(bills: &[&Bill]) -> String {
    bills.iter().map(|bill| render_card(bill)).collect()
}

pub fn render_big_billed_icon() -> String {
    format!(
        r#"<div id="big-billed-icon" data-testid="big-billed-icon"> {} </div>"#,
        icons::BIG_BILLED
    )
}

/// Contenido del modal de justificatif del admin
pub fn render_admin_receipt(file_url: Option<&str>, width: u32) -> String {
    match file_url.filter(|url| !url.is_empty()) {
        Some(url) => format!(
            r#"<div style="text-align: center;"><img width="{width}" src="{url}" alt="Bill"/></div>"#,
            url = escape_html(url),
        ),
        None => format!(r#"<div style="text-align: center;">{}</div>"#, NO_RECEIPT_MESSAGE),
    }
}

fn render_status_list(bills: &[Bill], status: BillStatus, filter: &BillFilter) -> String {
    let index = status.index();
    format!(
        r#"<div class="status-bills-header" id="status-bills-header{index}">
          <h3> {title} ({count}) </h3>
          <span class="arrow-icon" id="arrow-icon{index}" data-testid="arrow-icon{index}">{arrow}</span>
        </div>
        <div id="status-bills-container{index}"></div>"#,
        title = list_title(status),
        count = filtered_bills(bills, status, filter).len(),
        arrow = icons::ARROW,
    )
}

fn render_modal() -> String {
    r#"<div class="modal fade" id="modaleFileAdmin1" data-testid="modaleFileAdmin" tabindex="-1" role="dialog" aria-labelledby="modaleFileAdminTitle" aria-hidden="true">
      <div class="modal-dialog modal-dialog-centered modal-lg" role="document">
        <div class="modal-content">
          <div class="modal-header">
            <h5 class="modal-title" id="modaleFileAdminTitle">Justificatif</h5>
            <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
          </div>
          <div class="modal-body"></div>
        </div>
      </div>
    </div>"#
        .to_string()
}

pub fn render_dashboard(state: ViewState<&[Bill]>, filter: &BillFilter, viewer: Option<&User>) -> String {
    let bills = match state {
        ViewState::Loading => return render_loading_page(),
        ViewState::Error(error) => return render_error_page(&error, viewer),
        ViewState::Ready(bills) => bills,
    };
    let lists: String = BillStatus::ALL
        .iter()
        .map(|status| render_status_list(bills, *status, filter))
        .collect();
    format!(
        r#"<div class="layout">
      {layout}
      <div class="dashboard-content">
        <div class="dashboard-left-container">
          {lists}
        </div>
        <div class="dashboard-right-container">
          <div id="dashboard-detail">
            {icon}
          </div>
        </div>
      </div>
      {modal}
    </div>"#,
        layout = render_vertical_layout(120, viewer),
        icon = render_big_billed_icon(),
        modal = render_modal(),
    )
}
