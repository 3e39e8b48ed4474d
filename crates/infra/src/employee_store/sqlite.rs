//! SQLite-backed employee store.
//!
//! Embedded single-file store; the schema is created on connect if absent.
//! Connection and schema failures map to `StoreError::Unavailable`, which is
//! fatal at startup; request-time query failures map to `StoreError::Query`.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::instrument;

use staffboard_core::{Employee, EmployeeId};
use staffboard_reporting::DepartmentRollup;

use super::r#trait::{EmployeeStore, StoreError};

/// SQLite-backed employee store.
///
/// Uses a single-connection pool: the store is embedded in one process and
/// SQLite serializes writes anyway, and a single connection keeps
/// `sqlite::memory:` databases coherent in tests.
#[derive(Debug, Clone)]
pub struct SqliteEmployeeStore {
    pool: SqlitePool,
}

impl SqliteEmployeeStore {
    /// Connect to `url` (e.g. `sqlite://staffboard.db`), creating the
    /// database file and the `employees` table if they do not exist.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| StoreError::Unavailable(format!("invalid database url: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Unavailable(format!("connect failed: {e}")))?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS employees (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                department TEXT NOT NULL,
                role TEXT NOT NULL,
                salary REAL NOT NULL,
                age INTEGER NOT NULL,
                joining_date TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(format!("schema creation failed: {e}")))?;

        Ok(())
    }
}

fn map_sqlx_error(operation: &str, e: sqlx::Error) -> StoreError {
    StoreError::Query(format!("{operation}: {e}"))
}

fn row_to_employee(row: &SqliteRow) -> Result<Employee, StoreError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| map_sqlx_error("decode id", e))?;
    let id = EmployeeId::from_str(&id)
        .map_err(|e| StoreError::Query(format!("corrupt employee id: {e}")))?;

    let name: String = row
        .try_get("name")
        .map_err(|e| map_sqlx_error("decode name", e))?;
    let department: String = row
        .try_get("department")
        .map_err(|e| map_sqlx_error("decode department", e))?;
    let role: String = row
        .try_get("role")
        .map_err(|e| map_sqlx_error("decode role", e))?;
    let salary: f64 = row
        .try_get("salary")
        .map_err(|e| map_sqlx_error("decode salary", e))?;
    let age: i64 = row
        .try_get("age")
        .map_err(|e| map_sqlx_error("decode age", e))?;
    let joining_date: NaiveDate = row
        .try_get("joining_date")
        .map_err(|e| map_sqlx_error("decode joining_date", e))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| map_sqlx_error("decode created_at", e))?;

    Ok(Employee::new(
        id,
        name,
        department,
        role,
        salary,
        age,
        joining_date,
        created_at,
    ))
}

#[async_trait]
impl EmployeeStore for SqliteEmployeeStore {
    #[instrument(skip(self, employee), fields(employee_id = %employee.id()), err)]
    async fn insert(&self, employee: Employee) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees
                (id, name, department, role, salary, age, joining_date, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(employee.id().to_string())
        .bind(employee.name())
        .bind(employee.department())
        .bind(employee.role())
        .bind(employee.salary())
        .bind(employee.age())
        .bind(employee.joining_date())
        .bind(employee.created_at())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::DuplicateId(employee.id()))
            }
            Err(e) => Err(map_sqlx_error("insert", e)),
        }
    }

    #[instrument(skip(self), err)]
    async fn all(&self) -> Result<Vec<Employee>, StoreError> {
        // rowid reflects insertion order.
        let rows = sqlx::query(
            r#"
            SELECT id, name, department, role, salary, age, joining_date, created_at
            FROM employees
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("all", e))?;

        rows.iter().map(row_to_employee).collect()
    }

    #[instrument(skip(self), err)]
    async fn count(&self) -> Result<u64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("count", e))?;

        let count: i64 = row.try_get("cnt").map_err(|e| map_sqlx_error("count", e))?;
        Ok(count as u64)
    }

    #[instrument(skip(self), err)]
    async fn department_rollup(&self) -> Result<Vec<DepartmentRollup>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT department, COUNT(*) AS employee_count, AVG(salary) AS avg_salary
            FROM employees
            GROUP BY department
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("department_rollup", e))?;

        rows.iter()
            .map(|row| {
                let department: String = row
                    .try_get("department")
                    .map_err(|e| map_sqlx_error("decode department", e))?;
                let employee_count: i64 = row
                    .try_get("employee_count")
                    .map_err(|e| map_sqlx_error("decode employee_count", e))?;
                let avg_salary: f64 = row
                    .try_get("avg_salary")
                    .map_err(|e| map_sqlx_error("decode avg_salary", e))?;

                Ok(DepartmentRollup {
                    department,
                    employee_count: employee_count as u64,
                    avg_salary,
                })
            })
            .collect()
    }

    #[instrument(skip(self), err)]
    async fn count_age_between(&self, low: i64, high: i64) -> Result<u64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM employees WHERE age BETWEEN ? AND ?")
            .bind(low)
            .bind(high)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("count_age_between", e))?;

        let count: i64 = row.try_get("cnt").map_err(|e| map_sqlx_error("count_age_between", e))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use staffboard_reporting::{department_summaries_from_rollup, group_by_department};

    async fn memory_store() -> SqliteEmployeeStore {
        SqliteEmployeeStore::connect("sqlite::memory:").await.unwrap()
    }

    fn employee(id: EmployeeId, department: &str, salary: f64, age: i64) -> Employee {
        Employee::new(
            id,
            "Test Person",
            department,
            "Analyst",
            salary,
            age,
            NaiveDate::from_ymd_opt(2020, 5, 20).unwrap(),
            // Whole-second timestamp: keeps the TEXT round-trip exact.
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn store_starts_empty_after_schema_creation() {
        let store = memory_store().await;
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_then_scan_round_trips_every_field() {
        let store = memory_store().await;
        let id = EmployeeId::new();
        let original = employee(id, "Engineering", 123_456.78, 42);

        store.insert(original.clone()).await.unwrap();

        let all = store.all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], original);
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let store = memory_store().await;
        let id = EmployeeId::new();

        store.insert(employee(id, "Engineering", 100_000.0, 30)).await.unwrap();
        let err = store.insert(employee(id, "HR", 60_000.0, 40)).await.unwrap_err();

        match err {
            StoreError::DuplicateId(got) => assert_eq!(got, id),
            other => panic!("expected DuplicateId, got {other:?}"),
        }
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn rollup_matches_raw_record_grouping() {
        let store = memory_store().await;
        store.insert(employee(EmployeeId::new(), "Engineering", 100_000.0, 30)).await.unwrap();
        store.insert(employee(EmployeeId::new(), "Engineering", 200_000.0, 35)).await.unwrap();
        store.insert(employee(EmployeeId::new(), "Finance", 75_500.55, 50)).await.unwrap();

        let mut from_rollup =
            department_summaries_from_rollup(store.department_rollup().await.unwrap());
        let mut from_records = group_by_department(&store.all().await.unwrap()).unwrap();

        // Group order is unspecified on both paths; compare sorted.
        from_rollup.sort_by(|a, b| a.department.cmp(&b.department));
        from_records.sort_by(|a, b| a.department.cmp(&b.department));
        assert_eq!(from_rollup, from_records);
    }

    #[tokio::test]
    async fn age_range_count_is_inclusive_on_both_ends() {
        let store = memory_store().await;
        for age in [21, 22, 30, 31, 61] {
            store
                .insert(employee(EmployeeId::new(), "Sales", 50_000.0, age))
                .await
                .unwrap();
        }

        assert_eq!(store.count_age_between(22, 30).await.unwrap(), 2);
        assert_eq!(store.count_age_between(31, 40).await.unwrap(), 1);
        assert_eq!(store.count_age_between(41, 50).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unreachable_database_is_unavailable() {
        let err = SqliteEmployeeStore::connect("sqlite:///no/such/directory/staff.db")
            .await
            .unwrap_err();

        match err {
            StoreError::Unavailable(_) => {}
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }
}
