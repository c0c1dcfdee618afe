//! API Module
//!
//! HTTP surface of the responder. Connections are kept alive between
//! requests, so a poller can reuse one socket for every cycle.

pub mod hello;
pub mod rpc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Create the responder router
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(hello::hello).post(rpc::call))
        .layer(TraceLayer::new_for_http())
}
