use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::{Product, ProductDraft};
use crate::store::ProductStore;

/// In-process store backing the test suite. Same contract as the Postgres
/// store: ids assigned at insert, list order unspecified.
#[derive(Default)]
pub struct MemoryProductStore {
    records: RwLock<HashMap<Uuid, Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StorageError> {
        let product = Product {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            created_at: Utc::now(),
        };
        self.records
            .write()
            .await
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn list_all(&self) -> Result<Vec<Product>, StorageError> {
        Ok(self.records.read().await.values().cloned().collect())
    }
}
