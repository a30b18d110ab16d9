use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{Product, ProductRequest},
    AppState,
};

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn all_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Product>>)> {
    let products = state.service.get_all_products().await?;
    Ok((StatusCode::OK, Json(products)))
}
