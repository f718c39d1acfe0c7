//! tunegate-gw library interface
//!
//! Gateway between web clients and an upstream third-party music-catalog
//! API. The mediation core (catalog, upstream client, mediator) validates
//! logical operations, performs one bounded upstream GET per request, and
//! normalizes every outcome into a stable response envelope. The HTTP
//! surface in `api` is mechanical dispatch around that core.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod mediator;
pub mod services;

pub use crate::error::MediationError;

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::mediator::RequestMediator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Mediation pipeline; stateless, shared without locking
    pub mediator: Arc<RequestMediator>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(mediator: RequestMediator) -> Self {
        Self {
            mediator: Arc::new(mediator),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router.
///
/// Permissive CORS because the gateway fronts browser clients served
/// from arbitrary origins.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::catalog_routes())
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
