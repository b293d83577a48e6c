pub mod store;

pub use store::{FurnitureStore, SaleRecord, StoreError, StoreStatistics};
