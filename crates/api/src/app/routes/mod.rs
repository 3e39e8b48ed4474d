use axum::{routing::get, Router};

pub mod charts;
pub mod common;
pub mod pages;
pub mod summaries;
pub mod system;

/// Router for all dashboard endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/employees", get(pages::employees))
        .route("/health", get(system::health))
        .nest("/summary", summaries::router())
        .nest("/charts", charts::router())
}
