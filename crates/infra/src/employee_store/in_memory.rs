use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use staffboard_core::Employee;
use staffboard_reporting::DepartmentRollup;

use super::r#trait::{EmployeeStore, StoreError};

/// In-memory employee store.
///
/// Intended for tests/dev. Must be observably equivalent to the SQLite
/// store for every trait operation.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    records: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn insert(&self, employee: Employee) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;

        if records.iter().any(|r| r.id() == employee.id()) {
            return Err(StoreError::DuplicateId(employee.id()));
        }

        records.push(employee);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Employee>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;
        Ok(records.clone())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;
        Ok(records.len() as u64)
    }

    async fn department_rollup(&self) -> Result<Vec<DepartmentRollup>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;

        // First-seen group order, unrounded means (same contract as SQL
        // GROUP BY + AVG).
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<(String, u64, f64)> = Vec::new();
        for record in records.iter() {
            let slot = match index.get(record.department()) {
                Some(&slot) => slot,
                None => {
                    index.insert(record.department().to_string(), groups.len());
                    groups.push((record.department().to_string(), 0, 0.0));
                    groups.len() - 1
                }
            };
            let (_, count, total) = &mut groups[slot];
            *count += 1;
            *total += record.salary();
        }

        Ok(groups
            .into_iter()
            .map(|(department, employee_count, total)| DepartmentRollup {
                department,
                employee_count,
                avg_salary: total / employee_count as f64,
            })
            .collect())
    }

    async fn count_age_between(&self, low: i64, high: i64) -> Result<u64, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;
        Ok(records
            .iter()
            .filter(|r| (low..=high).contains(&r.age()))
            .count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use staffboard_core::EmployeeId;
    use staffboard_reporting::{department_summaries_from_rollup, group_by_department};

    fn employee(id: EmployeeId, department: &str, salary: f64, age: i64) -> Employee {
        Employee::new(
            id,
            "Test Person",
            department,
            "Analyst",
            salary,
            age,
            NaiveDate::from_ymd_opt(2020, 5, 20).unwrap(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn insert_then_scan_preserves_insertion_order() {
        let store = InMemoryEmployeeStore::new();
        let first = EmployeeId::new();
        let second = EmployeeId::new();

        store.insert(employee(first, "Engineering", 100_000.0, 30)).await.unwrap();
        store.insert(employee(second, "HR", 60_000.0, 40)).await.unwrap();

        let all = store.all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id(), first);
        assert_eq!(all[1].id(), second);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let store = InMemoryEmployeeStore::new();
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
        let store = InMemoryEmployeeStore::new();
        store.insert(employee(EmployeeId::new(), "Engineering", 100_000.0, 30)).await.unwrap();
        store.insert(employee(EmployeeId::new(), "Engineering", 200_000.0, 35)).await.unwrap();
        store.insert(employee(EmployeeId::new(), "Finance", 75_500.55, 50)).await.unwrap();

        let from_rollup =
            department_summaries_from_rollup(store.department_rollup().await.unwrap());
        let from_records = group_by_department(&store.all().await.unwrap()).unwrap();

        assert_eq!(from_rollup, from_records);
    }

    #[tokio::test]
    async fn age_range_count_is_inclusive_on_both_ends() {
        let store = InMemoryEmployeeStore::new();
        for age in [21, 22, 30, 31, 61] {
            store.insert(employee(EmployeeId::new(), "Sales", 50_000.0, age)).await.unwrap();
        }

        assert_eq!(store.count_age_between(22, 30).await.unwrap(), 2);
        assert_eq!(store.count_age_between(31, 40).await.unwrap(), 1);
        assert_eq!(store.count_age_between(41, 50).await.unwrap(), 0);
        assert_eq!(store.count_age_between(51, 60).await.unwrap(), 0);
    }
}
