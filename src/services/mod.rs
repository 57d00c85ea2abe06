// Service exports
pub mod api;
pub mod auth;
pub mod catalog;
pub mod store;

pub use api::ApiClient;
pub use auth::{AuthClient, AuthError};
pub use catalog::{CatalogClient, CatalogError};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
