use std::sync::Arc;

use axum::extract::Extension;
use axum::response::Response;

use crate::app::routes::common::render;
use crate::app::services::AppServices;
use crate::app::{errors, templates};

pub async fn index() -> Response {
    render(templates::IndexTemplate)
}

pub async fn employees(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let employees = match services.store().all().await {
        Ok(records) => records,
        Err(e) => return errors::store_error_to_response(e),
    };

    render(templates::EmployeesTemplate { employees })
}
