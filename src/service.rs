use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{AppError, AppResult, FieldError};
use crate::models::{Product, ProductDraft, ProductRequest};
use crate::store::ProductStore;

/// Validation and orchestration between the HTTP boundary and the store.
/// Stateless; the store reference is its only dependency, passed at
/// construction.
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Validates the request and persists a new product. The store is not
    /// touched when validation fails.
    pub async fn create_product(&self, request: ProductRequest) -> AppResult<Product> {
        let draft = validate(request)?;
        let product = self.store.insert(draft).await?;
        info!(id = %product.id, name = %product.name, "Created product");
        Ok(product)
    }

    /// Delegates to the store with no transformation.
    pub async fn get_all_products(&self) -> AppResult<Vec<Product>> {
        let products = self.store.list_all().await?;
        info!(count = products.len(), "Listed products");
        Ok(products)
    }
}

fn validate(request: ProductRequest) -> Result<ProductDraft, AppError> {
    let ProductRequest {
        name,
        description,
        price,
    } = request;

    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "must not be empty"));
    }

    let price = match price {
        Some(p) if p < Decimal::ZERO => {
            errors.push(FieldError::new("price", "must not be negative"));
            p
        }
        Some(p) => p,
        None => {
            errors.push(FieldError::new("price", "is required"));
            Decimal::ZERO
        }
    };

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(ProductDraft {
        name,
        description,
        price,
    })
}
