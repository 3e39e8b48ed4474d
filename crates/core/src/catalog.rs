//! Department/role reference data used for data entry and seeding.
//!
//! These sets are a convention, not a constraint: the store accepts any
//! department string and the reporting layer groups by whatever values are
//! actually present in the data.

/// The departments used when entering (or seeding) records.
pub const DEPARTMENTS: [&str; 5] = ["Engineering", "HR", "Sales", "Marketing", "Finance"];

/// Roles conventionally valid for a department.
///
/// Returns an empty slice for departments outside the catalog.
pub fn roles_for(department: &str) -> &'static [&'static str] {
    match department {
        "Engineering" => &["Engineer", "Senior Engineer", "Tech Lead"],
        "HR" => &["Recruiter", "HR Manager"],
        "Sales" => &["Sales Rep", "Account Executive"],
        "Marketing" => &["Content Writer", "Marketing Manager"],
        "Finance" => &["Accountant", "Finance Manager"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_department_has_two_or_three_roles() {
        for dept in DEPARTMENTS {
            let roles = roles_for(dept);
            assert!(
                (2..=3).contains(&roles.len()),
                "{dept} has {} roles",
                roles.len()
            );
        }
    }

    #[test]
    fn unknown_department_has_no_roles() {
        assert!(roles_for("Skunkworks").is_empty());
    }
}
