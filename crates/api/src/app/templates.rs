//! Page templates.
//!
//! Each summary page gets its own typed template: the template iterates the
//! aggregator's output sequence directly, field names intact, with no
//! intermediate transformation.

use askama::Template;

use staffboard_core::Employee;
use staffboard_reporting::{AgeBracketSummary, DepartmentSummary, JoiningYearSummary};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "employees.html")]
pub struct EmployeesTemplate {
    pub employees: Vec<Employee>,
}

#[derive(Template)]
#[template(path = "summary_department.html")]
pub struct DepartmentSummaryTemplate {
    pub title: &'static str,
    pub summary: Vec<DepartmentSummary>,
}

#[derive(Template)]
#[template(path = "summary_age.html")]
pub struct AgeSummaryTemplate {
    pub title: &'static str,
    pub summary: Vec<AgeBracketSummary>,
}

#[derive(Template)]
#[template(path = "summary_joining.html")]
pub struct JoiningSummaryTemplate {
    pub title: &'static str,
    pub summary: Vec<JoiningYearSummary>,
}
