//! Feature modules implementing the MORONS.TV API
//!
//! Each feature is a vertical slice with its own queries (read operations,
//! HTTP GET), commands (write operations, HTTP POST), and routes:
//!
//! - **videos**: catalog queries (all/featured/trending/most-moronic/by
//!   category), single-video detail with view counting, and video rating
//! - **creators**: content creator listing and detail
//! - **newsletter**: newsletter subscription
//!
//! Commands validate their input with the helpers in [`shared::validation`]
//! before touching the store; queries never fail except for missing
//! entities, which surface as 404 at the route layer.

pub mod creators;
pub mod newsletter;
pub mod shared;
pub mod videos;

use axum::Router;
use std::sync::Arc;

use crate::store::ContentStore;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// The in-memory content store, seeded at startup
    pub store: Arc<ContentStore>,
}

/// Creates the API router with all feature routes mounted
///
/// - `/videos` - video catalog, detail, and rating
/// - `/creators` - creator listing and detail
/// - `/subscribe` - newsletter subscription
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/videos", videos::videos_routes().with_state(state.store.clone()))
        .nest(
            "/creators",
            creators::creators_routes().with_state(state.store.clone()),
        )
        .merge(newsletter::newsletter_routes().with_state(state.store.clone()))
}
