use async_trait::async_trait;
use thiserror::Error;

use staffboard_core::{Employee, EmployeeId};
use staffboard_reporting::DepartmentRollup;

/// Store operation error.
///
/// These are **infrastructure errors** (connectivity, decoding, uniqueness)
/// as opposed to domain errors (missing fields). `Unavailable` is fatal when
/// raised during startup: the process must abort rather than serve requests
/// against a broken store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage cannot be reached or initialized.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Insert would violate id uniqueness.
    #[error("duplicate employee id: {0}")]
    DuplicateId(EmployeeId),

    /// A query failed or a stored row could not be decoded.
    #[error("store query failed: {0}")]
    Query(String),
}

/// Read-mostly store of employee records.
///
/// Records are immutable after insertion: there is no update or delete.
/// `insert` is used only by the startup seeder; every request handler reads.
///
/// ## Implementation requirements
///
/// - `insert` rejects duplicate ids (`StoreError::DuplicateId`).
/// - `all` returns records in stable insertion order.
/// - `department_rollup` groups by the department values actually present
///   and reports the **unrounded** mean salary per group; the reporting
///   layer applies the presentation rounding so raw and pre-aggregated paths
///   stay observably identical.
/// - `count_age_between` treats both bounds as inclusive.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert(&self, employee: Employee) -> Result<(), StoreError>;

    /// Full scan, stable insertion order.
    async fn all(&self) -> Result<Vec<Employee>, StoreError>;

    /// Total record count; used only for the seeding check.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Store-side `GROUP BY department`: head count + unrounded mean salary.
    async fn department_rollup(&self) -> Result<Vec<DepartmentRollup>, StoreError>;

    /// Count of records with `age` in `[low, high]` (inclusive).
    async fn count_age_between(&self, low: i64, high: i64) -> Result<u64, StoreError>;
}

#[async_trait]
impl<S> EmployeeStore for std::sync::Arc<S>
where
    S: EmployeeStore + ?Sized,
{
    async fn insert(&self, employee: Employee) -> Result<(), StoreError> {
        (**self).insert(employee).await
    }

    async fn all(&self) -> Result<Vec<Employee>, StoreError> {
        (**self).all().await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        (**self).count().await
    }

    async fn department_rollup(&self) -> Result<Vec<DepartmentRollup>, StoreError> {
        (**self).department_rollup().await
    }

    async fn count_age_between(&self, low: i64, high: i64) -> Result<u64, StoreError> {
        (**self).count_age_between(low, high).await
    }
}
