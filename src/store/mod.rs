//! Access to the remote person collection.
//!
//! The screens depend on the `PersonStore` trait only. `HttpPersonStore`
//! talks to the real collection endpoint; `MemoryPersonStore` backs
//! offline mode and tests.

mod error;
mod http;
mod memory;

pub use error::StoreError;
pub use http::HttpPersonStore;
pub use memory::MemoryPersonStore;

use async_trait::async_trait;

use crate::person::Person;

/// The person collection, one asynchronous request/response per call.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Fetch every record, in whatever order the collection keeps them.
    async fn list(&self) -> Result<Vec<Person>, StoreError>;

    /// Fetch one record by id.
    async fn get(&self, id: &str) -> Result<Person, StoreError>;

    /// Persist a new record. The input carries no id; the returned record
    /// has one assigned.
    async fn create(&self, person: &Person) -> Result<Person, StoreError>;

    /// Replace the record stored under `id`.
    async fn update(&self, id: &str, person: &Person) -> Result<(), StoreError>;

    /// Remove the record stored under `id`.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
