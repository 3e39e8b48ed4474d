//! Embeddable bar-chart routes.
//!
//! Same data as the summary pages, second presentation path. Where the
//! store offers a pre-aggregated query the chart uses it instead of a full
//! scan; the adapted output is observably identical to the raw-record path.

use std::sync::Arc;

use axum::extract::Extension;
use axum::response::{Html, IntoResponse, Response};
use axum::{routing::get, Router};

use staffboard_reporting::{
    age_bracket_chart, department_chart, department_summaries_from_rollup, group_by_joining_year,
    joining_year_chart, AgeBracketSummary, AGE_BRACKETS,
};

use crate::app::chart::bar_chart_html;
use crate::app::services::AppServices;
use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/department", get(department))
        .route("/age", get(age))
        .route("/joining", get(joining))
}

/// Head count per department, from the store-side rollup.
pub async fn department(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let rollup = match services.store().department_rollup().await {
        Ok(rollup) => rollup,
        Err(e) => return errors::store_error_to_response(e),
    };

    let summary = department_summaries_from_rollup(rollup);
    Html(bar_chart_html(&department_chart(&summary))).into_response()
}

/// Head count per fixed age bracket, one inclusive range count per bracket.
pub async fn age(Extension(services): Extension<Arc<AppServices>>) -> Response {
    // An empty store yields an empty series, matching the raw-record path.
    match services.store().count().await {
        Ok(0) => return Html(bar_chart_html(&age_bracket_chart(&[]))).into_response(),
        Ok(_) => {}
        Err(e) => return errors::store_error_to_response(e),
    }

    let mut summary = Vec::with_capacity(AGE_BRACKETS.len());
    for bracket in AGE_BRACKETS {
        let count = match services.store().count_age_between(bracket.min, bracket.max).await {
            Ok(count) => count,
            Err(e) => return errors::store_error_to_response(e),
        };
        summary.push(AgeBracketSummary {
            age_group: bracket.label,
            employee_count: count,
        });
    }

    Html(bar_chart_html(&age_bracket_chart(&summary))).into_response()
}

/// Head count per joining year; scans and tallies like the summary page.
pub async fn joining(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let records = match services.store().all().await {
        Ok(records) => records,
        Err(e) => return errors::store_error_to_response(e),
    };
    let summary = match group_by_joining_year(&records) {
        Ok(summary) => summary,
        Err(e) => return errors::domain_error_to_response(e),
    };

    Html(bar_chart_html(&joining_year_chart(&summary))).into_response()
}
