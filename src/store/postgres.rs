use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::StorageError;
use crate::models::{Product, ProductDraft};
use crate::store::ProductStore;

/// Durable store over PostgreSQL. Each insert is a single atomic record
/// write; no cross-record transaction is needed.
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StorageError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, price, created_at
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn list_all(&self) -> Result<Vec<Product>, StorageError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, created_at FROM products",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
