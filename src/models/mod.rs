pub mod bill;
pub mod bill_filter;
pub mod user;
pub mod upload;

pub use bill::{Bill, BillRow, BillStatus};
pub use bill_filter::{filtered_bills, BillFilter};
pub use user::{Credentials, LoginResponse, NewUser, User, UserType};
pub use upload::{BillUpload, CreatedBill, SelectedFile};
