// ============================================================================
// DASHBOARD VIEWMODEL - Revisión de notas de frais por el admin
// ============================================================================
// Tres listas desplegables (pending / accepted / refused) y un panel derecho
// que alterna entre el formulario de revisión y el icono de Billed.
// ============================================================================

use std::rc::Rc;
use crate::dom::{listener, DomError, EventKind, EventTarget};
use crate::models::{filtered_bills, Bill, BillFilter, BillStatus};
use crate::router::Route;
use crate::services::{Store, StoreError};
use crate::state::{DashboardState, EditToggle, ListToggle};
use crate::viewmodels::{bind_logout, PageContext};
use crate::views::{render_admin_receipt, render_big_billed_icon, render_cards, render_dashboard_form};

const DETAIL_PANEL: &str = "#dashboard-detail";
const NAVBAR: &str = ".vertical-navbar";
const MODAL: &str = "#modaleFileAdmin1";
const MODAL_DIALOG: &str = "#modaleFileAdmin1 .modal-dialog";
const MODAL_BODY: &str = "#modaleFileAdmin1 .modal-body";
const EYE_ICON: &str = "#icon-eye-d";
const ACCEPT_BUTTON: &str = "#btn-accept-bill";
const REFUSE_BUTTON: &str = "#btn-refuse-bill";
const COMMENT_INPUT: &str = "#commentary2";

const CARD_BACKGROUND: &str = "#0D5AE5";
const SELECTED_CARD_BACKGROUND: &str = "#2A2B35";
const DEFAULT_RECEIPT_WIDTH: u32 = 500;

fn arrow_selector(status: BillStatus) -> String {
    format!("#arrow-icon{}", status.index())
}

fn container_selector(status: BillStatus) -> String {
    format!("#status-bills-container{}", status.index())
}

fn card_selector(bill_id: &str) -> String {
    format!("#open-bill{}", bill_id)
}

/// 80% del diálogo; 500 si no se puede medir
fn receipt_width(base_width: f64) -> u32 {
    let width = (base_width * 0.8).floor();
    if width >= 1.0 {
        width as u32
    } else {
        DEFAULT_RECEIPT_WIDTH
    }
}

pub async fn get_bills_all_users(store: Option<&dyn Store>) -> Result<Vec<Bill>, StoreError> {
    match store {
        Some(store) => store.list_bills().await,
        None => Ok(Vec::new()),
    }
}

/// Persistir la revisión del admin. Sin store no hay nada que hacer.
pub async fn update_bill(bill: &Bill, store: Option<&dyn Store>) -> Result<Option<Bill>, StoreError> {
    let Some(store) = store else {
        return Ok(None);
    };
    let data = serde_json::to_string(bill).map_err(|e| StoreError::Serialization(e.to_string()))?;
    match store.update_bill(data, bill.id.clone()).await {
        Ok(updated) => Ok(Some(updated)),
        Err(e) => {
            log::error!("❌ [DASHBOARD] Error actualizando nota {}: {}", bill.id(), e);
            Err(e)
        }
    }
}

#[derive(Clone)]
pub struct DashboardViewModel {
    ctx: PageContext,
    bills: Rc<Vec<Bill>>,
    filter: Rc<BillFilter>,
    state: DashboardState,
}

impl DashboardViewModel {
    pub fn new(ctx: PageContext, bills: Vec<Bill>, filter: BillFilter) -> Self {
        Self {
            ctx,
            bills: Rc::new(bills),
            filter: Rc::new(filter),
            state: DashboardState::new(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn init(&self) -> Result<(), DomError> {
        for status in BillStatus::ALL {
            let vm = self.clone();
            self.ctx.dom.listen(
                &arrow_selector(status),
                EventKind::Click,
                listener(move |_| {
                    if let Err(e) = vm.handle_show_tickets(status) {
                        log::error!("❌ [DASHBOARD] Lista {} no disponible: {}", status.as_str(), e);
                    }
                }),
            )?;
        }
        bind_logout(&self.ctx)?;
        Ok(())
    }

    /// Abre o cierra la lista de un estado. Solo se enlazan las cards recién pintadas.
    pub fn handle_show_tickets(&self, status: BillStatus) -> Result<ListToggle, DomError> {
        let dom = &self.ctx.dom;
        let toggle = self.state.toggle_list(status);
        match toggle {
            ListToggle::Expand => {
                dom.set_style(&arrow_selector(status), "transform", "rotate(0deg)")?;
                let shown = filtered_bills(&self.bills, status, &self.filter);
                dom.set_inner_html(&container_selector(status), &render_cards(&shown))?;
                for bill in shown {
                    let vm = self.clone();
                    let card = bill.clone();
                    dom.listen(
                        &card_selector(bill.id()),
                        EventKind::Click,
                        listener(move |_| {
                            if let Err(e) = vm.handle_edit_ticket(&card) {
                                log::error!("❌ [DASHBOARD] Error abriendo nota {}: {}", card.id(), e);
                            }
                        }),
                    )?;
                }
            }
            ListToggle::Collapse => {
                dom.set_style(&arrow_selector(status), "transform", "rotate(90deg)")?;
                dom.set_inner_html(&container_selector(status), "")?;
            }
        }
        Ok(toggle)
    }

    pub fn handle_edit_ticket(&self, bill: &Bill) -> Result<EditToggle, DomError> {
        let dom = &self.ctx.dom;
        let toggle = self.state.toggle_edit(bill.id());
        match toggle {
            EditToggle::ShowForm => {
                for other in self.bills.iter() {
                    dom.set_style(&card_selector(other.id()), "background", CARD_BACKGROUND)?;
                }
                dom.set_style(&card_selector(bill.id()), "background", SELECTED_CARD_BACKGROUND)?;
                dom.set_inner_html(DETAIL_PANEL, &render_dashboard_form(bill))?;
                dom.set_style(NAVBAR, "height", "150vh")?;
            }
            EditToggle::ShowPlaceholder => {
                dom.set_style(&card_selector(bill.id()), "background", CARD_BACKGROUND)?;
                self.show_placeholder()?;
            }
        }
        self.bind_review_controls(bill)?;
        Ok(toggle)
    }

    fn show_placeholder(&self) -> Result<(), DomError> {
        self.ctx.dom.set_inner_html(DETAIL_PANEL, &render_big_billed_icon())?;
        self.ctx.dom.set_style(NAVBAR, "height", "120vh")
    }

    fn bind_review_controls(&self, bill: &Bill) -> Result<(), DomError> {
        let dom = &self.ctx.dom;

        let vm = self.clone();
        dom.listen(
            EYE_ICON,
            EventKind::Click,
            listener(move |event| {
                if let Err(e) = vm.handle_click_icon_eye(event.target()) {
                    log::error!("❌ [DASHBOARD] No se pudo abrir el justificatif: {}", e);
                }
            }),
        )?;

        for (selector, status) in [(ACCEPT_BUTTON, BillStatus::Accepted), (REFUSE_BUTTON, BillStatus::Refused)] {
            let vm = self.clone();
            let bill = bill.clone();
            dom.listen(
                selector,
                EventKind::Click,
                listener(move |_| match vm.review(&bill, status) {
                    Ok(updated) => vm.persist(updated),
                    Err(e) => log::error!("❌ [DASHBOARD] Error revisando nota {}: {}", bill.id(), e),
                }),
            )?;
        }
        Ok(())
    }

    fn review(&self, bill: &Bill, status: BillStatus) -> Result<Bill, DomError> {
        let comment = self.ctx.dom.value(COMMENT_INPUT).unwrap_or_default();
        let updated = Bill {
            status,
            comment_admin: Some(comment),
            ..bill.clone()
        };
        self.show_placeholder()?;
        Ok(updated)
    }

    /// Nota aceptada con el comentario del admin. No persiste.
    pub fn handle_accept_submit(&self, bill: &Bill) -> Result<Bill, DomError> {
        self.review(bill, BillStatus::Accepted)
    }

    /// Nota rechazada con el comentario del admin. No persiste.
    pub fn handle_refuse_submit(&self, bill: &Bill) -> Result<Bill, DomError> {
        self.review(bill, BillStatus::Refused)
    }

    fn persist(&self, bill: Bill) {
        let Some(store) = self.ctx.store.clone() else {
            return;
        };
        let ctx = self.ctx.clone();
        self.ctx.spawn(async move {
            if update_bill(&bill, Some(&*store)).await.is_ok() {
                log::info!("✅ [DASHBOARD] Nota {} marcada {}", bill.id(), bill.status.as_str());
                ctx.navigate(Route::Dashboard);
            }
        });
    }

    pub fn handle_click_icon_eye(&self, icon: &EventTarget) -> Result<(), DomError> {
        let dom = &self.ctx.dom;
        let base_width = dom.width(MODAL_DIALOG).or_else(|| dom.width(MODAL)).unwrap_or(0.0);
        let body = render_admin_receipt(icon.attribute("data-bill-url"), receipt_width(base_width));
        dom.set_inner_html(MODAL_BODY, &body)?;
        dom.show_modal(MODAL)
    }
}
