// ============================================================================
// FORMAT - Conversión de fechas y estados a texto de pantalla
// ============================================================================

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use crate::models::BillStatus;

/// Abreviaturas francesas de mes (tres letras, capitalizadas)
const MONTHS_FR: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Interpreta una fecha ISO ("2004-04-04", "2004-04-04T10:00:00", RFC 3339)
pub fn parse_bill_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(date_time) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// "2004-04-04" -> "4 Avr. 04"
pub fn format_date(raw: &str) -> Result<String, FormatError> {
    let date = parse_bill_date(raw).ok_or_else(|| FormatError::InvalidDate(raw.to_string()))?;
    let month = MONTHS_FR[date.month0() as usize];
    let year = date.year().rem_euclid(100);
    Ok(format!("{} {}. {:02}", date.day(), month, year))
}

pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refusé",
    }
}

/// Equivalente a `parseInt`: prefijo entero opcionalmente con signo
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}
