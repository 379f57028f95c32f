// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP con el backend Billed
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use std::rc::Rc;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;
use crate::config::CONFIG;
use crate::models::{Bill, BillUpload, CreatedBill, LoginResponse};
use crate::services::store::{committed_bill, Store, StoreError};
use crate::utils::{KeyValueStorage, JWT_STORAGE_KEY};

/// Store HTTP (fetch + JWT en localStorage)
#[derive(Clone)]
pub struct HttpStore {
    base_url: String,
    storage: Rc<dyn KeyValueStorage>,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self::with_base_url(&CONFIG.api_url, storage)
    }

    pub fn with_base_url(base_url: &str, storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            storage,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Agregar `Authorization: Bearer <jwt>` si hay token guardado
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.storage.get_item(JWT_STORAGE_KEY) {
            Some(jwt) if !jwt.is_empty() => builder.header("Authorization", &format!("Bearer {}", jwt)),
            _ => builder,
        }
    }

    fn json_body(builder: RequestBuilder, data: String) -> Result<Request, StoreError> {
        builder
            .header("Content-Type", "application/json")
            .body(data)
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

async fn send(request: Request) -> Result<Response, StoreError> {
    request
        .send()
        .await
        .map_err(|e| StoreError::Network(e.to_string()))
}

/// Equivalente a `jsonOrThrowIfError`: usa el `message` del backend si existe
async fn check(response: Response) -> Result<Response, StoreError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or_else(|_| format!("HTTP {}: {}", status, status_text));
    Err(StoreError::Http { status, message })
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| StoreError::Parse(e.to_string()))
}

#[async_trait(?Send)]
impl Store for HttpStore {
    async fn list_bills(&self) -> Result<Vec<Bill>, StoreError> {
        let builder = self.authorized(Request::get(&self.url("/bills")));
        let request = builder.build().map_err(|e| StoreError::Serialization(e.to_string()))?;
        let bills: Vec<Bill> = parse(send(request).await?).await?;
        log::info!("📋 [API] {} notes de frais recibidas", bills.len());
        Ok(bills)
    }

    async fn create_bill(&self, upload: BillUpload) -> Result<CreatedBill, StoreError> {
        let file = upload
            .file
            .handle
            .as_ref()
            .ok_or_else(|| StoreError::Serialization("Fichier indisponible".to_string()))?;
        let form = FormData::new().map_err(|e| StoreError::Serialization(format!("{:?}", e)))?;
        form.append_with_blob("file", file)
            .and_then(|_| form.append_with_str("email", &upload.email))
            .map_err(|e| StoreError::Serialization(format!("{:?}", e)))?;

        log::info!("📤 [API] Subiendo justificatif {}", upload.file.name);

        // Sin Content-Type: el navegador pone el boundary del multipart
        let request = self
            .authorized(Request::post(&self.url("/bills")))
            .body(form)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        parse(send(request).await?).await
    }

    async fn update_bill(&self, data: String, selector: Option<String>) -> Result<Bill, StoreError> {
        let path = match &selector {
            Some(id) => format!("/bills/{}", id),
            None => "/bills/undefined".to_string(),
        };
        log::info!("📝 [API] Actualizando note de frais {:?}", selector);
        let request = Self::json_body(self.authorized(Request::patch(&self.url(&path))), data.clone())?;
        let response = check(send(request).await?).await?;
        let body = response.text().await.unwrap_or_default();
        committed_bill(&body, &data)
    }

    async fn login(&self, data: String) -> Result<LoginResponse, StoreError> {
        // Sin Authorization: el token todavía no existe o es de otra sesión
        let request = Self::json_body(Request::post(&self.url("/auth/login")), data)?;
        parse(send(request).await?).await
    }

    async fn create_user(&self, data: String) -> Result<(), StoreError> {
        let request = Self::json_body(self.authorized(Request::post(&self.url("/users"))), data)?;
        check(send(request).await?).await.map(|_| ())
    }
}
