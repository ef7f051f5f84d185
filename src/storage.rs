mod store;

pub use store::{DataStore, StoreError};
