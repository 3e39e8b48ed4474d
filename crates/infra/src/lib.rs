//! Infrastructure layer: the record store and the startup seeder.

pub mod employee_store;
pub mod seed;

pub use employee_store::{EmployeeStore, InMemoryEmployeeStore, SqliteEmployeeStore, StoreError};
pub use seed::{ensure_seeded, SEED_TARGET};
