// ============================================================================
// BILLS VIEW - Tabla "Mes notes de frais" del empleado
// ============================================================================

use std::cmp::Ordering;
use crate::models::{BillRow, User};
use crate::utils::parse_bill_date;
use crate::views::layout::{render_actions, render_error_page, render_loading_page, render_vertical_layout};
use crate::views::{escape_html, ViewState};

/// Más reciente primero. Las fechas no interpretables van después,
/// ordenadas por texto descendente.
pub fn compare_by_date_desc(a: &str, b: &str) -> Ordering {
    match (parse_bill_date(a), parse_bill_date(b)) {
        (Some(date_a), Some(date_b)) => date_b.cmp(&date_a).then_with(|| b.cmp(a)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.cmp(a),
    }
}

pub fn sort_rows(rows: &[BillRow]) -> Vec<&BillRow> {
    let mut sorted: Vec<&BillRow> = rows.iter().collect();
    sorted.sort_by(|a, b| compare_by_date_desc(&a.bill.date, &b.bill.date));
    sorted
}

fn render_row(row: &BillRow) -> String {
    format!(
        r#"<tr>
        <td>{expense_type}</td>
        <td>{name}</td>
        <td>{date}</td>
        <td>{amount} €</td>
        <td>{status}</td>
        <td>{actions}</td>
      </tr>"#,
        expense_type = escape_html(&row.bill.expense_type),
        name = escape_html(&row.bill.name),
        date = escape_html(&row.date),
        amount = row.bill.amount_label(),
        status = row.status,
        actions = render_actions(row.bill.file_url.as_deref()),
    )
}

fn render_modal() -> String {
    r#"<div class="modal fade" id="modaleFile" tabindex="-1" role="dialog" aria-labelledby="modaleFileTitle" aria-hidden="true">
      <div class="modal-dialog modal-dialog-centered modal-lg" role="document">
        <div class="modal-content">
          <div class="modal-header">
            <h5 class="modal-title" id="modaleFileTitle">Justificatif</h5>
            <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
          </div>
          <div class="modal-body"></div>
        </div>
      </div>
    </div>"#
        .to_string()
}

/// Contenido del modal de justificatif del empleado
pub fn render_bill_proof(file_url: &str, width: u32) -> String {
    format!(
        r#"<div style="text-align: center;" class="bill-proof-container"><img width="{width}" src="{url}" alt="Bill" /></div>"#,
        url = escape_html(file_url),
    )
}

pub fn render_bills(state: ViewState<&[BillRow]>, viewer: Option<&User>) -> String {
    let rows = match state {
        ViewState::Loading => return render_loading_page(),
        ViewState::Error(error) => return render_error_page(&error, viewer),
        ViewState::Ready(rows) => rows,
    };
    let body: String = sort_rows(rows).into_iter().map(render_row).collect();
    format!(
        r#"<div class="layout">
      {layout}
      <div class="content">
        <div class="content-header">
          <div class="content-title">Mes notes de frais</div>
          <button type="button" data-testid="btn-new-bill" class="btn btn-primary">Nouvelle note de frais</button>
        </div>
        <div id="data-table">
          <table id="example" class="table table-striped" style="width:100%">
            <thead>
              <tr>
                <th>Type</th>
                <th>Nom</th>
                <th>Date</th>
                <th>Montant</th>
                <th>Statut</th>
                <th>Actions</th>
              </tr>
            </thead>
            <tbody data-testid="tbody">
              {body}
            </tbody>
          </table>
        </div>
      </div>
      {modal}
    </div>"#,
        layout = render_vertical_layout(120, viewer),
        modal = render_modal(),
    )
}
