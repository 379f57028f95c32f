// ============================================================================
// NEW BILL VIEW - Formulario "Envoyer une note de frais"
// ============================================================================

use crate::models::User;
use crate::views::layout::render_vertical_layout;

pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

pub fn render_new_bill(viewer: Option<&User>) -> String {
    let options: String = EXPENSE_TYPES
        .iter()
        .map(|t| format!("<option>{}</option>", t))
        .collect();
    format!(
        r#"<div class="layout">
      {layout}
      <div class="content">
        <div class="content-header">
          <div class="content-title">Envoyer une note de frais</div>
        </div>
        <div class="form-newbill-container content-inner">
          <form data-testid="form-new-bill">
            <div class="row">
              <div class="col-md-6">
                <div class="col-half">
                  <label for="expense-type" class="bold-label">Type de dépense</label>
                  <select required class="form-control blue-border" data-testid="expense-type">
                    {options}
                  </select>
                </div>
                <div class="col-half">
                  <label for="expense-name" class="bold-label">Nom de la dépense</label>
                  <input type="text" class="form-control blue-border" data-testid="expense-name" placeholder="Vol Paris Londres" />
                </div>
                <div class="col-half">
                  <label for="datepicker" class="bold-label">Date</label>
                  <input required type="date" class="form-control blue-border" data-testid="datepicker" />
                </div>
                <div class="col-half">
                  <label for="amount" class="bold-label">Montant TTC</label>
                  <input required type="number" class="form-control blue-border input-icon input-icon-right" data-testid="amount" placeholder="348"/>
                </div>
                <div class="col-half-row">
                  <div class="flex-col">
                    <label for="vat" class="bold-label">TVA</label>
                    <input type="number" class="form-control blue-border" data-testid="vat" placeholder="70" />
                  </div>
                  <div class="flex-col">
                    <input required type="number" class="form-control blue-border" data-testid="pct" placeholder="20" />
                  </div>
                </div>
              </div>
              <div class="col-md-6">
                <div class="col-half">
                  <label for="commentary" class="bold-label">Commentaire</label>
                  <textarea class="form-control blue-border" data-testid="commentary" rows="3"></textarea>
                </div>
                <div class="col-half">
                  <label for="file" class="bold-label">Justificatif</label>
                  <input required type="file" accept=".jpg,.jpeg,.png" class="form-control blue-border" data-testid="file" />
                </div>
              </div>
            </div>
            <div class="row">
              <div class="col-md-6">
                <div class="col-half">
                  <button type="submit" id="btn-send-bill" class="btn btn-primary">Envoyer</button>
                </div>
              </div>
            </div>
          </form>
        </div>
      </div>
    </div>"#,
        layout = render_vertical_layout(120, viewer),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_has_every_field() {
        let html = render_new_bill(None);
        for testid in [
            "form-new-bill",
            "expense-type",
            "expense-name",
            "datepicker",
            "amount",
            "vat",
            "pct",
            "commentary",
            "file",
        ] {
            assert!(html.contains(&format!(r#"data-testid="{}""#, testid)), "{}", testid);
        }
        assert!(html.contains("Envoyer une note de frais"));
        assert!(html.contains(r#"<button type="submit" id="btn-send-bill""#));
    }

    #[test]
    fn test_expense_type_options() {
        let html = render_new_bill(None);
        for expense_type in EXPENSE_TYPES {
            assert!(html.contains(&format!("<option>{}</option>", expense_type)));
        }
    }
}
