//! Progress summary derived from an employee's task list.

use crate::api::models::Todo;

/// Completion statistics for one employee's task list.
///
/// Derived per invocation and never persisted. Completed titles keep the
/// order they appear in the source list; nothing is deduplicated or
/// re-sorted, so the completed count can never exceed the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    employee_name: String,
    total: usize,
    completed_titles: Vec<String>,
}

impl ProgressSummary {
    /// Partition `todos` into completed and total counts for `employee_name`.
    pub fn from_todos(employee_name: impl Into<String>, todos: &[Todo]) -> Self {
        let completed_titles = todos
            .iter()
            .filter(|todo| todo.completed)
            .map(|todo| todo.title.clone())
            .collect();

        ProgressSummary {
            employee_name: employee_name.into(),
            total: todos.len(),
            completed_titles,
        }
    }

    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    /// Number of completed tasks.
    pub fn completed(&self) -> usize {
        self.completed_titles.len()
    }

    /// Number of tasks overall, completed or not.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Titles of completed tasks, in source order.
    pub fn completed_titles(&self) -> &[String] {
        &self.completed_titles
    }

    /// Render the report: one header line, then one line per completed task
    /// prefixed with a tab and a space.
    pub fn render(&self) -> String {
        let mut out = format!(
            "Employee {} is done with tasks({}/{}):",
            self.employee_name,
            self.completed(),
            self.total
        );
        for title in &self.completed_titles {
            out.push_str("\n\t ");
            out.push_str(title);
        }
        out
    }
}
