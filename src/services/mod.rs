pub mod store;
pub mod api_client;

pub use store::{committed_bill, Store, StoreError};
pub use api_client::HttpStore;
