//! In-memory product directory service.
//!
//! The binary lives in `src/main.rs`; the library exposes the router and
//! state so integration tests can spin up the full service on an ephemeral
//! port with a fresh directory per test.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod models;
pub mod seed;

use crate::directory::ProductDirectory;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<ProductDirectory>>,
}

impl AppState {
    /// State pre-loaded with the five startup records.
    pub fn seeded() -> Self {
        Self::with_directory(ProductDirectory::with_products(seed::initial_products()))
    }

    pub fn with_directory(directory: ProductDirectory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Products CRUD ───────────────────────────────────────────────────
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/products/:item",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .patch(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )

        // ── Everything else ─────────────────────────────────────────────────
        .fallback(handlers::invalid_api)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
