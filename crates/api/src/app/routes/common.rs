use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::app::errors;

/// Render a template to a response, mapping render failure to a generic
/// error page.
pub fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => errors::render_error_to_response(e),
    }
}
