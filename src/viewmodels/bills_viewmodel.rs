// ============================================================================
// BILLS VIEWMODEL - Lista del empleado + modal de justificatif
// ============================================================================

use crate::dom::{listener, DomError, EventKind, EventTarget};
use crate::models::{Bill, BillRow};
use crate::router::Route;
use crate::services::{Store, StoreError};
use crate::utils::{format_date, format_status};
use crate::viewmodels::{bind_logout, PageContext};
use crate::views::render_bill_proof;

const NEW_BILL_BUTTON: &str = r#"button[data-testid="btn-new-bill"]"#;
const EYE_ICON: &str = r#"div[data-testid="icon-eye"]"#;
const MODAL: &str = "#modaleFile";
const MODAL_BODY: &str = "#modaleFile .modal-body";

/// Fecha formateada por registro; una fecha corrupta no aborta el lote
fn to_row(bill: Bill) -> BillRow {
    let date = match format_date(&bill.date) {
        Ok(date) => date,
        Err(e) => {
            log::warn!("⚠️ [BILLS] {} para la nota {}", e, bill.id());
            bill.date.clone()
        }
    };
    BillRow {
        status: format_status(bill.status).to_string(),
        date,
        bill,
    }
}

pub async fn get_bills(store: Option<&dyn Store>) -> Result<Vec<BillRow>, StoreError> {
    let Some(store) = store else {
        return Ok(Vec::new());
    };
    let bills = store.list_bills().await.map_err(|e| {
        log::error!("❌ [BILLS] Error obteniendo notas de frais: {}", e);
        e
    })?;
    let rows: Vec<BillRow> = bills.into_iter().map(to_row).collect();
    log::info!("📥 [BILLS] {} notas de frais", rows.len());
    Ok(rows)
}

#[derive(Clone)]
pub struct BillsViewModel {
    ctx: PageContext,
}

impl BillsViewModel {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    pub fn init(&self) -> Result<(), DomError> {
        let ctx = self.ctx.clone();
        self.ctx.dom.listen(
            NEW_BILL_BUTTON,
            EventKind::Click,
            listener(move |_| ctx.navigate(Route::NewBill)),
        )?;

        let vm = self.clone();
        let icons = self.ctx.dom.listen(
            EYE_ICON,
            EventKind::Click,
            listener(move |event| {
                if let Err(e) = vm.handle_click_icon_eye(event.target()) {
                    log::error!("❌ [BILLS] No se pudo abrir el justificatif: {}", e);
                }
            }),
        )?;
        log::debug!("👁️ [BILLS] {} iconos enlazados", icons);

        bind_logout(&self.ctx)?;
        Ok(())
    }

    /// Abre `#modaleFile`; la imagen se pinta al terminar la transición,
    /// cuando el modal ya tiene ancho.
    pub fn handle_click_icon_eye(&self, icon: &EventTarget) -> Result<(), DomError> {
        let url = icon.attribute("data-bill-url").unwrap_or_default().to_string();
        let dom = self.ctx.dom.clone();
        self.ctx.dom.listen_once(
            MODAL,
            EventKind::ModalShown,
            listener(move |_| {
                let width = (dom.width(MODAL).unwrap_or(0.0) * 0.5).floor().max(0.0) as u32;
                if let Err(e) = dom.set_inner_html(MODAL_BODY, &render_bill_proof(&url, width)) {
                    log::error!("❌ [BILLS] Modal sin cuerpo: {}", e);
                }
            }),
        )?;
        self.ctx.dom.show_modal(MODAL)
    }
}
