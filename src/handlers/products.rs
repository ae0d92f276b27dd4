use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{CreateProduct, Product, UpdateProduct},
    AppState,
};

fn missing(item: &str) -> String {
    format!("Product with item name '{}' does not exist", item)
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let products = state.directory.read().await.all();

    info!(count = products.len(), "Listed products");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "data": products,
            "message": "Products fetched successfully",
        })),
    )
}

// ── Get by item ───────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(item): Path<String>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let product = state
        .directory
        .read()
        .await
        .get(&item)
        .ok_or_else(|| AppError::NotFound(missing(&item)))?;

    info!(item = %item, "Fetched product");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "data": product,
            "message": format!("Product '{}' fetched successfully", item),
        })),
    ))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    // Field order is part of the contract, and zero or empty-string values
    // fail the same way as absent ones.
    let quantity = payload
        .quantity
        .filter(|&q| q != 0)
        .ok_or_else(|| AppError::BadRequest("quantity is required".to_string()))?;
    let item = payload
        .item
        .filter(|item| !item.is_empty())
        .ok_or_else(|| AppError::BadRequest("item is required".to_string()))?;
    let price = payload
        .price
        .filter(|&p| p != 0.0)
        .ok_or_else(|| AppError::BadRequest("price is required".to_string()))?;

    let product = state.directory.write().await.create(Product {
        item,
        price,
        quantity,
    })?;

    info!(item = %product.item, "Created product");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "data": product,
            "message": "Product added successfully",
        })),
    ))
}

// ── Update (PUT and PATCH share this handler) ────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(item): Path<String>,
    Json(payload): Json<UpdateProduct>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.directory.write().await.update(&item, &payload) {
        Some(product) => {
            info!(item = %item, "Updated product");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "data": product,
                    "message": format!("Product '{}' updated successfully", item),
                })),
            )
        }
        // A missing target is reported as a plain success:false body, not a
        // 404. Part of the wire contract.
        None => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": false,
                "message": missing(&item),
            })),
        ),
    }
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(item): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.directory.write().await.remove(&item) {
        Some(product) => {
            info!(item = %item, "Deleted product");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "data": product,
                    "message": format!("Product '{}' deleted successfully", item),
                })),
            )
        }
        // Same 200-with-success:false convention as update.
        None => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": false,
                "message": missing(&item),
            })),
        ),
    }
}
