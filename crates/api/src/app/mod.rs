//! HTTP application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store selection and shared request services
//! - `routes/`: HTTP routes + handlers (pages, summaries, charts)
//! - `templates.rs`: page templates
//! - `chart.rs`: bar-chart rendering adapter
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use anyhow::Context;
use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod chart;
pub mod errors;
pub mod routes;
pub mod services;
pub mod templates;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Connects the store, creates the schema, and seeds an empty store, all
/// awaited to completion before any route is reachable, so seeding runs at
/// most once per process.
pub async fn build_app() -> anyhow::Result<Router> {
    let services = services::build_services()
        .await
        .context("store initialization failed")?;

    staffboard_infra::ensure_seeded(services.store(), staffboard_infra::SEED_TARGET)
        .await
        .context("startup seeding failed")?;

    Ok(build_router(Arc::new(services)))
}

/// Router over already-initialized services (tests inject fixtures here).
pub fn build_router(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(ServiceBuilder::new().layer(Extension(services)))
}
