// ============================================================================
// BILL FILTER - Qué notes de frais ve un revisor en el dashboard
// ============================================================================

use std::collections::HashSet;
use crate::models::{Bill, BillStatus};

/// Política de filtrado: por estado y, opcionalmente, sin ciertas cuentas
/// (cuentas de prueba y las notas del propio admin).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillFilter {
    excluded_emails: HashSet<String>,
}

impl BillFilter {
    /// Solo por estado, sin exclusiones
    pub fn status_only() -> Self {
        Self::default()
    }

    /// Un admin nunca revisa sus propias notas ni las de cuentas de prueba
    pub fn for_viewer(viewer_email: &str, test_accounts: &[String]) -> Self {
        let mut excluded_emails: HashSet<String> = test_accounts.iter().cloned().collect();
        if !viewer_email.is_empty() {
            excluded_emails.insert(viewer_email.to_string());
        }
        Self { excluded_emails }
    }

    pub fn accepts(&self, bill: &Bill, status: BillStatus) -> bool {
        bill.status == status && !self.excluded_emails.contains(&bill.email)
    }
}

pub fn filtered_bills<'a>(bills: &'a [Bill], status: BillStatus, filter: &BillFilter) -> Vec<&'a Bill> {
    bills.iter().filter(|bill| filter.accepts(bill, status)).collect()
}
