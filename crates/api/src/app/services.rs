//! Store selection and shared request services.

use std::sync::Arc;

use staffboard_infra::{EmployeeStore, InMemoryEmployeeStore, SqliteEmployeeStore, StoreError};

/// Services shared by all request handlers.
///
/// The store handle is the only cross-request state; handlers receive it via
/// an `Extension` and never touch globals.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn EmployeeStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }
}

/// Select the store backend from the environment.
///
/// `STAFFBOARD_IN_MEMORY=true` wires the in-memory store (dev/tests);
/// otherwise SQLite at `STAFFBOARD_DATABASE_URL`, defaulting to
/// `sqlite://staffboard.db` next to the binary.
pub async fn build_services() -> Result<AppServices, StoreError> {
    let use_in_memory = std::env::var("STAFFBOARD_IN_MEMORY")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if use_in_memory {
        tracing::info!("using in-memory employee store");
        return Ok(AppServices::new(Arc::new(InMemoryEmployeeStore::new())));
    }

    let url = std::env::var("STAFFBOARD_DATABASE_URL").unwrap_or_else(|_| {
        tracing::debug!("STAFFBOARD_DATABASE_URL not set; using sqlite://staffboard.db");
        "sqlite://staffboard.db".to_string()
    });

    let store = SqliteEmployeeStore::connect(&url).await?;
    tracing::info!(%url, "connected employee store");
    Ok(AppServices::new(Arc::new(store)))
}
