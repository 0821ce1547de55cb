pub mod feed;
pub mod health;
pub mod videos;

use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

/// Build all routes for the API
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::routes())
        .merge(videos::routes())
        .merge(feed::routes())
}

/// Routes plus middleware, bound to application state
pub fn build_app(state: Arc<AppState>) -> Router {
    build_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
