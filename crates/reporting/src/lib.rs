//! `staffboard-reporting` — the aggregation/reporting core.
//!
//! Pure functions that turn a flat collection of employee records into
//! grouped summaries for three fixed dimensions (department, age bracket,
//! joining year), plus the presenter that adapts a summary into chart-ready
//! form. No storage or HTTP concerns live here; everything is deterministic
//! given the same record set.

pub mod aggregator;
pub mod bracket;
pub mod presenter;

pub use aggregator::{
    department_summaries_from_rollup, group_by_age_bracket, group_by_department,
    group_by_joining_year, AgeBracketSummary, DepartmentRollup, DepartmentSummary,
    JoiningYearSummary,
};
pub use bracket::{AgeBracket, AGE_BRACKETS};
pub use presenter::{age_bracket_chart, department_chart, joining_year_chart, ChartSeries};
