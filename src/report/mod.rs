//! The news site analytics report.
//!
//! A report is a fixed, ordered list of [`Report`] descriptors. Each one
//! pairs a heading with a query builder; the runner executes them in order
//! and renders every result as a two-column table.

pub mod format;
pub mod queries;
pub mod runner;

pub use format::format_report;
pub use runner::run_reports;

use crate::db::QueryResult;
use crate::error::{ReportError, Result};

/// One section of the report.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    /// Heading printed above the table.
    pub heading: &'static str,
    /// Builds the SQL for this section.
    pub query: fn(Option<u32>) -> String,
    /// Row limit handed to the builder.
    pub limit: Option<u32>,
}

impl Report {
    /// The SQL text for this section.
    pub fn sql(&self) -> String {
        (self.query)(self.limit)
    }
}

/// Every report section, in output order.
pub const REPORTS: &[Report] = &[
    Report {
        heading: "Three most popular articles",
        query: queries::popular_articles,
        limit: Some(3),
    },
    Report {
        heading: "Most popular article authors",
        query: queries::popular_authors,
        limit: None,
    },
    Report {
        heading: "Days with more than 1% of requests leading to errors",
        query: queries::days_with_high_error_rate,
        limit: None,
    },
];

/// A `(label, value)` line of a report table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub label: String,
    pub value: String,
}

impl ResultRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Converts a query result into report rows.
///
/// Every row must hold exactly two text values.
pub fn rows_from_result(result: &QueryResult) -> Result<Vec<ResultRow>> {
    result
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| match row.as_slice() {
            [label, value] => {
                let text = |v: &crate::db::Value| {
                    v.as_str().map(String::from).ok_or_else(|| {
                        ReportError::shape(format!("row {i}: expected text, got {}", v.kind()))
                    })
                };
                Ok(ResultRow {
                    label: text(label)?,
                    value: text(value)?,
                })
            }
            other => Err(ReportError::shape(format!(
                "row {i}: expected 2 columns, got {}",
                other.len()
            ))),
        })
        .collect()
}
