//! Runs report sections in order and writes them out.

use super::{format_report, rows_from_result, Report};
use crate::db::{query_in_session, Connector};
use crate::error::Result;
use std::io::Write;
use tracing::{debug, info};

/// Writes the full report for `reports` to `out`.
///
/// Sections run strictly one after another, each in its own database
/// session. The first failure stops the run: later sections and the closing
/// banner are not written.
pub async fn run_reports<C, W>(connector: &C, reports: &[Report], out: &mut W) -> Result<()>
where
    C: Connector + ?Sized,
    W: Write,
{
    writeln!(
        out,
        "=== Report for database: {} ===",
        connector.database_name()
    )?;

    for report in reports {
        writeln!(out, "\n   {}:\n", report.heading)?;
        out.flush()?;

        info!("Running report: {}", report.heading);
        let sql = report.sql();
        debug!("SQL: {}", sql.trim());

        let result = query_in_session(connector, &sql).await?;
        let rows = rows_from_result(&result)?;
        debug!(
            "{} rows in {:?} for '{}'",
            rows.len(),
            result.execution_time,
            report.heading
        );

        writeln!(out, "{}", format_report(&rows)?)?;
    }

    writeln!(out, "\n=== End of report ===")?;
    out.flush()?;
    Ok(())
}
