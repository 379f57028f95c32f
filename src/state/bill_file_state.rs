// ============================================================================
// BILL FILE STATE - Justificatif subido entre "change" y "submit"
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadedFile {
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub bill_id: Option<String>,
}

#[derive(Clone, Default)]
pub struct BillFileState {
    uploaded: Rc<RefCell<UploadedFile>>,
}

impl BillFileState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_uploaded(&self, bill_id: String, file_url: Option<String>, file_name: String) {
        *self.uploaded.borrow_mut() = UploadedFile {
            file_url,
            file_name: Some(file_name),
            bill_id: Some(bill_id),
        };
    }

    pub fn get(&self) -> UploadedFile {
        self.uploaded.borrow().clone()
    }

    pub fn reset(&self) {
        *self.uploaded.borrow_mut() = UploadedFile::default();
    }
}
