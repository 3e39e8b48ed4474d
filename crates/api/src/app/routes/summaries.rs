//! Tabular summary pages.
//!
//! Each handler performs one consistent full scan and hands the records to
//! the pure aggregator; the template iterates the resulting sequence as-is.

use std::sync::Arc;

use axum::extract::Extension;
use axum::response::Response;
use axum::{routing::get, Router};

use staffboard_reporting::{group_by_age_bracket, group_by_department, group_by_joining_year};

use crate::app::routes::common::render;
use crate::app::services::AppServices;
use crate::app::{errors, templates};

pub fn router() -> Router {
    Router::new()
        .route("/department", get(department))
        .route("/age", get(age))
        .route("/joining", get(joining))
}

pub async fn department(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let records = match services.store().all().await {
        Ok(records) => records,
        Err(e) => return errors::store_error_to_response(e),
    };
    let summary = match group_by_department(&records) {
        Ok(summary) => summary,
        Err(e) => return errors::domain_error_to_response(e),
    };

    render(templates::DepartmentSummaryTemplate {
        title: "Department Summary",
        summary,
    })
}

pub async fn age(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let records = match services.store().all().await {
        Ok(records) => records,
        Err(e) => return errors::store_error_to_response(e),
    };
    let summary = match group_by_age_bracket(&records) {
        Ok(summary) => summary,
        Err(e) => return errors::domain_error_to_response(e),
    };

    render(templates::AgeSummaryTemplate {
        title: "Age Group Summary",
        summary,
    })
}

pub async fn joining(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let records = match services.store().all().await {
        Ok(records) => records,
        Err(e) => return errors::store_error_to_response(e),
    };
    let summary = match group_by_joining_year(&records) {
        Ok(summary) => summary,
        Err(e) => return errors::domain_error_to_response(e),
    };

    render(templates::JoiningSummaryTemplate {
        title: "Joining Year Summary",
        summary,
    })
}
