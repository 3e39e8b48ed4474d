//! `staffboard-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage or HTTP
//! concerns): the employee entity, its identifier, the department/role
//! catalog used for data entry, and the domain error model.

pub mod catalog;
pub mod employee;
pub mod error;
pub mod id;

pub use employee::Employee;
pub use error::{DomainError, DomainResult};
pub use id::EmployeeId;
