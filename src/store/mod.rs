use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{Product, ProductDraft};

#[cfg(test)]
mod memory;
mod postgres;

#[cfg(test)]
pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

/// Persistence abstraction for products. The store owns the durable
/// collection; callers never see ids before insert assigns them.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Assigns a fresh unique id, persists the draft, returns the full
    /// stored record.
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StorageError>;

    /// Every stored product, in unspecified order. An empty store yields an
    /// empty vec, never an error.
    async fn list_all(&self) -> Result<Vec<Product>, StorageError>;
}
