// ============================================================================
// NEW BILL VIEWMODEL - Subida del justificatif + envío de la nota
// ============================================================================
// El fichero se sube en cuanto se elige (evento change); el submit solo
// completa la nota ya creada con la clave devuelta por el store.
// ============================================================================

use serde_json::Number;
use crate::dom::{listener, DomError, DomEvent, EventKind};
use crate::models::{Bill, BillStatus, BillUpload, SelectedFile};
use crate::router::Route;
use crate::state::BillFileState;
use crate::utils::parse_int;
use crate::viewmodels::{bind_logout, PageContext};

pub const INVALID_FILE_MESSAGE: &str = "Veuillez selectionner un fichier jpg, jpeg ou png.";

const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
const ALLOWED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];
const DEFAULT_PCT: i64 = 20;

const FORM: &str = r#"form[data-testid="form-new-bill"]"#;
const FILE_INPUT: &str = r#"input[data-testid="file"]"#;

/// Extensión Y tipo MIME tienen que ser de imagen
pub fn is_valid_receipt(file: &SelectedFile) -> bool {
    let name = file.name.to_lowercase();
    let valid_extension = name
        .rsplit_once('.')
        .map_or(false, |(_, extension)| ALLOWED_EXTENSIONS.contains(&extension));
    valid_extension && ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str())
}

/// `parseInt(pct) || 20`
fn parse_pct(raw: &str) -> i64 {
    parse_int(raw).filter(|pct| *pct != 0).unwrap_or(DEFAULT_PCT)
}

#[derive(Clone)]
pub struct NewBillViewModel {
    ctx: PageContext,
    file_state: BillFileState,
}

impl NewBillViewModel {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            file_state: BillFileState::new(),
        }
    }

    pub fn file_state(&self) -> &BillFileState {
        &self.file_state
    }

    pub fn init(&self) -> Result<(), DomError> {
        let vm = self.clone();
        self.ctx.dom.listen(FORM, EventKind::Submit, listener(move |event| vm.handle_submit(event)))?;

        let vm = self.clone();
        self.ctx.dom.listen(
            FILE_INPUT,
            EventKind::Change,
            listener(move |event| vm.handle_change_file(event)),
        )?;

        bind_logout(&self.ctx)?;
        Ok(())
    }

    pub fn handle_change_file(&self, event: &DomEvent) {
        event.prevent_default();

        let Some(file) = self.ctx.dom.selected_file(FILE_INPUT) else {
            return;
        };

        if !is_valid_receipt(&file) {
            log::warn!("⚠️ [NEW BILL] Fichero rechazado: {} ({})", file.name, file.mime_type);
            self.ctx.dom.alert(INVALID_FILE_MESSAGE);
            if let Err(e) = self.ctx.dom.set_value(FILE_INPUT, "") {
                log::error!("❌ [NEW BILL] No se pudo vaciar el input: {}", e);
            }
            self.file_state.reset();
            return;
        }

        let Some(store) = self.ctx.store.clone() else {
            return;
        };
        let file_name = file.name.clone();
        let upload = BillUpload {
            file,
            email: self.ctx.viewer_email(),
        };
        let file_state = self.file_state.clone();
        self.ctx.spawn(async move {
            match store.create_bill(upload).await {
                Ok(created) => {
                    log::info!("📤 [NEW BILL] Justificatif subido: {:?}", created.file_url);
                    file_state.set_uploaded(created.key, created.file_url, file_name);
                }
                Err(e) => log::error!("❌ [NEW BILL] Error subiendo justificatif: {}", e),
            }
        });
    }

    /// Nota construida a partir del formulario + el fichero ya subido
    pub fn read_form(&self) -> Bill {
        let dom = &self.ctx.dom;
        let field = |selector: &str| dom.value(selector).unwrap_or_default();
        let uploaded = self.file_state.get();
        Bill {
            id: None,
            email: self.ctx.viewer_email(),
            expense_type: field(r#"select[data-testid="expense-type"]"#),
            name: field(r#"input[data-testid="expense-name"]"#),
            amount: parse_int(&field(r#"input[data-testid="amount"]"#)).map(Number::from),
            date: field(r#"input[data-testid="datepicker"]"#),
            vat: field(r#"input[data-testid="vat"]"#),
            pct: Some(Number::from(parse_pct(&field(r#"input[data-testid="pct"]"#)))),
            commentary: field(r#"textarea[data-testid="commentary"]"#),
            file_url: uploaded.file_url,
            file_name: uploaded.file_name,
            status: BillStatus::Pending,
            comment_admin: None,
        }
    }

    pub fn handle_submit(&self, event: &DomEvent) {
        event.prevent_default();

        let bill = self.read_form();
        log::info!("📝 [NEW BILL] Enviando nota del {}", bill.date);

        let Some(store) = self.ctx.store.clone() else {
            return;
        };
        let data = match serde_json::to_string(&bill) {
            Ok(data) => data,
            Err(e) => {
                log::error!("❌ [NEW BILL] Error serializando nota: {}", e);
                return;
            }
        };
        let selector = self.file_state.get().bill_id;
        let ctx = self.ctx.clone();
        self.ctx.spawn(async move {
            match store.update_bill(data, selector).await {
                Ok(_) => ctx.navigate(Route::Bills),
                Err(e) => log::error!("❌ [NEW BILL] Error enviando nota: {}", e),
            }
        });
    }
}
