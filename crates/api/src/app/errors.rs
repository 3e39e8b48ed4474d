use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use staffboard_core::DomainError;
use staffboard_infra::StoreError;

/// A malformed record tripping a summary is a server-side data problem: the
/// detail goes to the log, the client gets a generic failure page.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    tracing::error!(error = %err, "summary computation failed");
    html_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something went wrong while computing the summary.",
    )
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store access failed");
    html_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something went wrong while reading employee records.",
    )
}

pub fn render_error_to_response(err: askama::Error) -> axum::response::Response {
    tracing::error!(error = %err, "template rendering failed");
    html_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something went wrong while rendering the page.",
    )
}

pub fn html_error(status: StatusCode, message: &str) -> axum::response::Response {
    let body = format!(
        "<!DOCTYPE html><html><head><title>{status}</title></head>\
         <body><h1>{status}</h1><p>{message}</p></body></html>"
    );
    (status, Html(body)).into_response()
}
