// Utils compartidos

pub mod constants;
pub mod format;
pub mod storage;

pub use constants::*;
pub use format::{format_date, format_status, parse_bill_date, parse_int, FormatError};
pub use storage::{load_user, save_to_storage, BrowserStorage, KeyValueStorage, MemoryStorage, StorageError};
