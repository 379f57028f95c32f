// ============================================================================
// DASHBOARD FORM - Detalle de una nota de frais para el admin
// ============================================================================

use crate::models::{Bill, BillStatus};
use crate::views::{escape_html, icons};

fn render_eye(file_url: Option<&str>) -> String {
    let url_attr = file_url
        .map(|url| format!(r#" data-bill-url="{}""#, escape_html(url)))
        .unwrap_or_default();
    format!(
        r#"<span id="icon-eye-d" data-testid="icon-eye-d"{url_attr}>{icon}</span>"#,
        icon = icons::EYE_WHITE,
    )
}

fn render_review_controls(bill: &Bill) -> String {
    if bill.status == BillStatus::Pending {
        return r#"<div class="row">
          <div class="col-sm">
            <label for="commentary-admin" class="bold-label">Ajouter un commentaire</label>
            <textarea id="commentary2" class="form-control blue-border" data-testid="commentary2" rows="5"></textarea>
          </div>
        </div>
        <div class="row">
          <div class="col-sm buttons-flex">
            <button type="submit" id="btn-refuse-bill" data-testid="btn-refuse-bill-d" class="btn btn-primary">Refuser</button>
            <button type="submit" id="btn-accept-bill" data-testid="btn-accept-bill-d" class="btn btn-primary">Accepter</button>
          </div>
        </div>"#
            .to_string();
    }
    format!(
        r#"<div class="row">
          <div class="col-sm">
            <label for="commentary-admin" class="bold-label">Votre commentaire</label>
            <div class="input-field"> {} </div>
          </div>
        </div>"#,
        escape_html(bill.comment_admin.as_deref().unwrap_or_default())
    )
}

pub fn render_dashboard_form(bill: &Bill) -> String {
    format!(
        r#"<div class="container dashboard-form" data-testid="dashboard-form">
      <div class="row">
        <div class="col-sm" id="dashboard-form-col1">
          <label for="expense-type" class="bold-label">Type de dépense</label>
          <div class="input-field"> {expense_type} </div>
          <label for="expense-name" class="bold-label">Nom de la dépense</label>
          <div class="input-field"> {name} </div>
          <label for="datepicker" class="bold-label">Date</label>
          <div class="input-field input-flex">
            <span>{date}</span>
            <span> {calendar} </span>
          </div>
        </div>
        <div class="col-sm" id="dashboard-form-col2">
          <label for="commentary" class="bold-label">Commentaire</label>
          <div class="textarea-field" style="height: 300px;"> {commentary} </div>
        </div>
      </div>
      <div class="row">
        <div class="col-sm">
          <label for="amount" class="bold-label">Montant TTC </label>
          <div class="input-field input-flex">
            <span data-testid="amount-d">{amount}</span>
            <span> {euro} </span>
          </div>
        </div>
        <div class="col-sm">
          <label for="vat" class="bold-label">TVA</label>
          <div id="vat-flex-container">
            <div class="input-field input-flex vat-flex">
              <span>{vat}</span>
              <span> {pct_icon} </span>
            </div>
            <div class="input-field input-flex percentage-flex">
              <span>{pct}</span>
            </div>
          </div>
        </div>
      </div>
      <div class="row">
        <div class="col-sm">
          <label for="file" class="bold-label">Justificatif</label>
          <div class="input-field input-flex">
            <span>{file_name}</span>
            <div class="icons-container">
              {eye}
            </div>
          </div>
        </div>
      </div>
      {controls}
    </div>"#,
        expense_type = escape_html(&bill.expense_type),
        name = escape_html(&bill.name),
        date = escape_html(&bill.date),
        calendar = icons::CALENDAR,
        commentary = escape_html(&bill.commentary),
        amount = bill.amount_label(),
        euro = icons::EURO,
        vat = escape_html(&bill.vat),
        pct_icon = icons::PCT,
        pct = bill.pct_label(),
        file_name = escape_html(bill.file_name.as_deref().unwrap_or_default()),
        eye = render_eye(bill.file_url.as_deref()),
        controls = render_review_controls(bill),
    )
}
