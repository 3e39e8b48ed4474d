//! Employee record store boundary.
//!
//! This module defines an infrastructure-facing abstraction for persisting
//! and scanning employee records without making any storage assumptions. The
//! reporting layer consumes either raw records (`all`) or the store-side
//! aggregate forms (`department_rollup`, `count_age_between`) with identical
//! observable results.

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

pub use in_memory::InMemoryEmployeeStore;
pub use sqlite::SqliteEmployeeStore;
pub use r#trait::{EmployeeStore, StoreError};
