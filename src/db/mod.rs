//! Database abstraction layer for news-report.
//!
//! Provides a trait-based interface for database operations, so the report
//! runner can be driven by PostgreSQL in production and by an in-memory
//! mock in tests.

mod mock;
mod postgres;
mod types;

pub use mock::{MockConnector, MockDatabaseClient, MockResponse};
pub use postgres::{PostgresClient, PostgresConnector};
pub use types::{ColumnInfo, QueryResult, Row, Value};

use crate::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Trait defining the interface for database clients.
///
/// All database operations are async and return Results with ReportError.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Executes a SQL query and returns all of its rows.
    async fn execute_query(&self, sql: &str) -> Result<QueryResult>;

    /// Closes the database connection.
    async fn close(&self) -> Result<()>;
}

/// Opens database clients, one per report.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Name of the database the clients talk to.
    fn database_name(&self) -> &str;

    /// Opens a new client.
    async fn open(&self) -> Result<Box<dyn DatabaseClient>>;
}

/// Runs one query in its own session.
///
/// The client is closed whether or not the query succeeds. A query error
/// takes precedence over a close error.
pub async fn query_in_session<C>(connector: &C, sql: &str) -> Result<QueryResult>
where
    C: Connector + ?Sized,
{
    let client = connector.open().await?;
    debug!("Session opened on {}", connector.database_name());

    let result = client.execute_query(sql).await;
    let closed = client.close().await;
    debug!("Session closed on {}", connector.database_name());

    let result = result?;
    closed?;
    Ok(result)
}
