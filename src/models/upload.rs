use serde::{Deserialize, Serialize};

/// Fichero elegido en el input `file` del formulario NewBill
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    /// Handle del navegador; `None` fuera de WASM
    pub handle: Option<web_sys::File>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            handle: None,
        }
    }
}

/// Datos enviados a `bills().create`
#[derive(Clone, Debug)]
pub struct BillUpload {
    pub file: SelectedFile,
    pub email: String,
}

/// Respuesta de `bills().create`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBill {
    #[serde(default)]
    pub file_url: Option<String>,
    pub key: String,
}
