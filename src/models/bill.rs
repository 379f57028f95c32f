use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Estado de una nota de frais. Solo existen estos tres valores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub const ALL: [BillStatus; 3] = [BillStatus::Pending, BillStatus::Accepted, BillStatus::Refused];

    /// Índice de la lista del dashboard (1 = pending, 2 = accepted, 3 = refused)
    pub fn index(&self) -> u8 {
        match self {
            BillStatus::Pending => 1,
            BillStatus::Accepted => 2,
            BillStatus::Refused => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "type", default)]
    pub expense_type: String,
    #[serde(default)]
    pub name: String,
    // null cuando el formulario no contenía un número
    #[serde(default, deserialize_with = "lenient_number")]
    pub amount: Option<Number>,
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub vat: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pct: Option<Number>,
    #[serde(default)]
    pub commentary: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    pub status: BillStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

impl Bill {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Parte local del email: "jean.dupont@x.fr" -> ("jean", "dupont")
    pub fn owner_names(&self) -> (String, String) {
        let local = self.email.split('@').next().unwrap_or_default();
        match local.split_once('.') {
            Some((first, rest)) => {
                let last = rest.split('.').next().unwrap_or_default();
                (first.to_string(), last.to_string())
            }
            None => (String::new(), local.to_string()),
        }
    }

    pub fn amount_label(&self) -> String {
        self.amount.as_ref().map(js_number).unwrap_or_else(|| "null".to_string())
    }

    pub fn pct_label(&self) -> String {
        self.pct.as_ref().map(js_number).unwrap_or_default()
    }
}

/// Número como lo escribe JS: `12.0` -> "12", `12.5` -> "12.5"
pub fn js_number(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", value as i64)
        }
        _ => number.to_string(),
    }
}

/// El backend a veces devuelve la TVA como número
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => js_number(&n),
        Some(other) => other.to_string(),
    })
}

/// Montos: enteros, decimales o texto numérico. Lo demás queda en null.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => Some(n),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .map(Number::from)
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(Number::from_f64))
        }
        _ => None,
    })
}

/// Proyección formateada que devuelve `get_bills`
#[derive(Clone, PartialEq, Debug)]
pub struct BillRow {
    pub bill: Bill,
    pub date: String,
    pub status: String,
}
