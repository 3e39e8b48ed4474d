//! Presenter: adapts a summary into chart-ready form.
//!
//! The tabular path needs no adapter at all: templates iterate the summary
//! vectors directly, field names intact. The chart path flattens a summary
//! into parallel label/value sequences plus a title for the bar-chart
//! renderer. Labels keep the aggregator's emission order; values are always
//! the head count (the department chart does not visualize `avg_salary`).

use crate::aggregator::{AgeBracketSummary, DepartmentSummary, JoiningYearSummary};

/// Chart-ready form of a summary: parallel labels/values plus a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

pub fn department_chart(summary: &[DepartmentSummary]) -> ChartSeries {
    ChartSeries {
        title: "Employees per Department".to_string(),
        labels: summary.iter().map(|s| s.department.clone()).collect(),
        values: summary.iter().map(|s| s.employee_count).collect(),
    }
}

pub fn age_bracket_chart(summary: &[AgeBracketSummary]) -> ChartSeries {
    ChartSeries {
        title: "Employees per Age Group".to_string(),
        labels: summary.iter().map(|s| s.age_group.to_string()).collect(),
        values: summary.iter().map(|s| s.employee_count).collect(),
    }
}

pub fn joining_year_chart(summary: &[JoiningYearSummary]) -> ChartSeries {
    ChartSeries {
        title: "Employees per Joining Year".to_string(),
        // Years are sorted as integers upstream and surfaced as text here.
        labels: summary.iter().map(|s| s.year.to_string()).collect(),
        values: summary.iter().map(|s| s.employee_count).collect(),
    }
}
