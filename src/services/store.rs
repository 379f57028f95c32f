// ============================================================================
// STORE - Contrato con el almacén remoto (bills / users / login)
// ============================================================================

use async_trait::async_trait;
use crate::models::{Bill, BillUpload, CreatedBill, LoginResponse};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Rechazo devuelto tal cual por el store (mensaje de error)
    #[error("{0}")]
    Rejected(String),
}

/// Almacén remoto. Los futures no son `Send`: todo corre en el hilo del navegador.
#[async_trait(?Send)]
pub trait Store {
    /// `bills().list()`
    async fn list_bills(&self) -> Result<Vec<Bill>, StoreError>;

    /// `bills().create({ data: FormData, headers: { noContentType } })`
    async fn create_bill(&self, upload: BillUpload) -> Result<CreatedBill, StoreError>;

    /// `bills().update({ data: json, selector })`. Un 2xx nunca es error:
    /// ver [`committed_bill`].
    async fn update_bill(&self, data: String, selector: Option<String>) -> Result<Bill, StoreError>;

    /// `login(json)`
    async fn login(&self, data: String) -> Result<LoginResponse, StoreError>;

    /// `users().create({ data: json })`
    async fn create_user(&self, data: String) -> Result<(), StoreError>;
}

/// Nota tras un `update` aceptado (2xx). El eco del servidor no siempre es
/// una nota completa: en ese caso vale la que se envió.
pub fn committed_bill(body: &str, sent: &str) -> Result<Bill, StoreError> {
    match serde_json::from_str::<Bill>(body) {
        Ok(bill) => Ok(bill),
        Err(e) => {
            log::warn!("⚠️ [STORE] Respuesta de update no interpretable ({}), se usa la nota enviada", e);
            serde_json::from_str(sent).map_err(|e| StoreError::Parse(e.to_string()))
        }
    }
}
