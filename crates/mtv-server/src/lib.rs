//! MORONS.TV Server Library
//!
//! HTTP backend for the MORONS.TV marketing site: a small REST API serving
//! videos, creators, ratings, and newsletter subscriptions from an in-memory
//! content store.
//!
//! # Architecture
//!
//! The server follows a vertical-slice layout: each feature owns its own
//! queries, commands, and routes.
//!
//! - **Queries** (read operations): list/filter/sort videos and creators,
//!   compute average ratings. Executed via HTTP GET.
//! - **Commands** (write operations): rate a video, subscribe to the
//!   newsletter. Executed via HTTP POST.
//!
//! All state lives in [`store::ContentStore`], an explicitly-constructed
//! in-memory store seeded with sample data at startup and handed to the
//! router as shared state. There is no database and no persistence; every
//! invariant holds only within a single process lifetime.
//!
//! ## Framework Stack
//!
//! - **Axum**: web framework and routing
//! - **Tower / tower-http**: middleware (tracing, CORS, compression)
//! - **Tracing**: structured logging via `mtv-common`
//!
//! # Example
//!
//! ```no_run
//! use mtv_server::{config::Config, store::ContentStore};
//! use std::sync::Arc;
//!
//! let config = Config::load().unwrap();
//! let store = Arc::new(ContentStore::seeded());
//! let app = mtv_server::router(store, &config);
//! # let _ = app;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod store;

use axum::{routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;

use store::ContentStore;

/// Build the full application router with middleware applied
pub fn router(store: Arc<ContentStore>, config: &config::Config) -> Router {
    let feature_state = features::FeatureState {
        store: store.clone(),
    };

    Router::new()
        .route("/health", get(health_check))
        .with_state(store)
        .nest("/api", features::router(feature_state))
        .layer(tower_http::compression::CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

/// Liveness endpoint reporting how many videos the store holds
async fn health_check(
    axum::extract::State(store): axum::extract::State<Arc<ContentStore>>,
) -> Json<serde_json::Value> {
    let videos = store.get_videos().await;
    Json(json!({
        "status": "healthy",
        "videos": videos.len(),
    }))
}

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
