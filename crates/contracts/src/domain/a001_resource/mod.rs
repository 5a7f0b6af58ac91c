pub mod aggregate;
pub mod filter;
pub mod seed;
pub mod store;

pub use aggregate::{Resource, ResourceId};
pub use filter::{filter_resources, ResourceQuery};
pub use store::{ResourceStore, StoreError};
