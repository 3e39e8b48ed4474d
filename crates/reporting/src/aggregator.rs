//! Grouped summaries over the employee record set.
//!
//! Three fixed dimensions: department, age bracket, joining year. Each
//! operation is a single pass over already-loaded records, validates field
//! presence as it goes, and never mutates its input.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;

use staffboard_core::{DomainError, DomainResult, Employee};

use crate::bracket::AGE_BRACKETS;

/// Per-department aggregate: head count and mean salary.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSummary {
    pub department: String,
    pub employee_count: u64,
    /// Arithmetic mean of the group's salaries, rounded to cents
    /// (half-to-even).
    pub avg_salary: f64,
}

/// Per-bracket aggregate: head count for one fixed age bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeBracketSummary {
    pub age_group: &'static str,
    pub employee_count: u64,
}

/// Per-year aggregate: head count for one joining year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoiningYearSummary {
    pub year: i32,
    pub employee_count: u64,
}

/// Store-side department aggregate (count + unrounded mean salary).
///
/// Produced by `GROUP BY department` in the store; adapted into
/// [`DepartmentSummary`] via [`department_summaries_from_rollup`] so the
/// observable output is identical to grouping raw records.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentRollup {
    pub department: String,
    pub employee_count: u64,
    pub avg_salary: f64,
}

/// Round to two decimal places, ties to even.
///
/// Pinned policy for `avg_salary`; the boundary cases live in the tests
/// below.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// A record missing a required field fails the whole aggregation, naming the
/// offending record. Unexpected *values* (odd department strings,
/// out-of-bracket ages) are not errors; only absence is.
fn require_fields(record: &Employee) -> DomainResult<()> {
    if record.name().trim().is_empty() {
        return Err(DomainError::missing_field(record.id(), "name"));
    }
    if record.department().trim().is_empty() {
        return Err(DomainError::missing_field(record.id(), "department"));
    }
    if record.role().trim().is_empty() {
        return Err(DomainError::missing_field(record.id(), "role"));
    }
    Ok(())
}

/// Group records by the department value actually present in the data.
///
/// Unexpected department strings become their own group, preserved verbatim.
/// Output order is the first-seen order of departments; callers must not
/// rely on it.
pub fn group_by_department(records: &[Employee]) -> DomainResult<Vec<DepartmentSummary>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, u64, f64)> = Vec::new();

    for record in records {
        require_fields(record)?;
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
        .map(|(department, employee_count, total)| DepartmentSummary {
            department,
            employee_count,
            avg_salary: round_to_cents(total / employee_count as f64),
        })
        .collect())
}

/// Count records per fixed age bracket.
///
/// Brackets are emitted in declaration order. Ages outside every bracket are
/// silently excluded from all counts. An empty record set yields an empty
/// summary.
pub fn group_by_age_bracket(records: &[Employee]) -> DomainResult<Vec<AgeBracketSummary>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let mut counts = [0u64; AGE_BRACKETS.len()];
    for record in records {
        require_fields(record)?;
        if let Some(slot) = AGE_BRACKETS.iter().position(|b| b.contains(record.age())) {
            counts[slot] += 1;
        }
    }

    Ok(AGE_BRACKETS
        .iter()
        .zip(counts)
        .map(|(bracket, employee_count)| AgeBracketSummary {
            age_group: bracket.label,
            employee_count,
        })
        .collect())
}

/// Count records per distinct joining year, ascending by year.
///
/// The year set is driven entirely by the data; ordering is integer
/// comparison even though the presenter surfaces years as text.
pub fn group_by_joining_year(records: &[Employee]) -> DomainResult<Vec<JoiningYearSummary>> {
    let mut years: BTreeMap<i32, u64> = BTreeMap::new();
    for record in records {
        require_fields(record)?;
        *years.entry(record.joining_date().year()).or_insert(0) += 1;
    }

    Ok(years
        .into_iter()
        .map(|(year, employee_count)| JoiningYearSummary {
            year,
            employee_count,
        })
        .collect())
}

/// Adapt a store-side rollup into department summaries.
///
/// Applies the same cent rounding as [`group_by_department`], so callers see
/// identical output whether the grouping ran in the store or over raw
/// records.
pub fn department_summaries_from_rollup(rollup: Vec<DepartmentRollup>) -> Vec<DepartmentSummary> {
    rollup
        .into_iter()
        .map(|r| DepartmentSummary {
            department: r.department,
            employee_count: r.employee_count,
            avg_salary: round_to_cents(r.avg_salary),
        })
        .collect()
}
