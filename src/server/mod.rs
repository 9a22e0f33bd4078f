//! HTTP surface: a diagnostic root route and the lookup endpoint.

pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::get;
use axum::Router;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::outbound_headers))
        .route("/processar_dados", get(handlers::processar_dados))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
