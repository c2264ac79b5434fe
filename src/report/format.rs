//! Two-column plain-text table rendering.

use super::ResultRow;
use crate::error::{ReportError, Result};

/// Separator between the two columns.
const SEPARATOR: &str = " - ";

/// Renders rows as aligned text.
///
/// The label column is left-justified and the value column right-justified,
/// each padded to its widest entry. Widths count `char`s. Lines are joined
/// with `\n` and there is no trailing newline.
///
/// An empty table has no column widths and is rejected.
pub fn format_report(rows: &[ResultRow]) -> Result<String> {
    let (label_width, value_width) = column_widths(rows)
        .ok_or_else(|| ReportError::shape("cannot format a report with no rows"))?;

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            format!(
                "{:<label_width$}{SEPARATOR}{:>value_width$}",
                row.label, row.value
            )
        })
        .collect();

    Ok(lines.join("\n"))
}

/// Widest label and widest value, or `None` for an empty table.
fn column_widths(rows: &[ResultRow]) -> Option<(usize, usize)> {
    let label = rows.iter().map(|r| r.label.chars().count()).max()?;
    let value = rows.iter().map(|r| r.value.chars().count()).max()?;
    Some((label, value))
}
