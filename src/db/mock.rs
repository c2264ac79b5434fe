//! Mock database client for testing.
//!
//! Answers queries from a table of canned responses keyed by SQL fragments,
//! and counts how many clients were opened and closed.

use super::{Connector, DatabaseClient, QueryResult};
use crate::error::{ReportError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A canned answer to a query.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return these rows.
    Rows(QueryResult),
    /// Fail with a query error carrying this message.
    Fail(String),
}

#[derive(Debug, Default)]
struct Counters {
    opened: AtomicUsize,
    closed: AtomicUsize,
}

/// A mock database client that returns predefined results.
///
/// The first response whose fragment occurs in the SQL text wins; SQL that
/// matches nothing yields an empty result.
#[derive(Debug, Clone)]
pub struct MockDatabaseClient {
    responses: Arc<Vec<(String, MockResponse)>>,
    counters: Arc<Counters>,
}

impl MockDatabaseClient {
    fn lookup(&self, sql: &str) -> Option<&MockResponse> {
        self.responses
            .iter()
            .find(|(fragment, _)| sql.contains(fragment.as_str()))
            .map(|(_, response)| response)
    }
}

#[async_trait]
impl DatabaseClient for MockDatabaseClient {
    async fn execute_query(&self, sql: &str) -> Result<QueryResult> {
        match self.lookup(sql) {
            Some(MockResponse::Rows(result)) => Ok(result
                .clone()
                .with_execution_time(Duration::from_millis(1))),
            Some(MockResponse::Fail(msg)) => Err(ReportError::query(msg.clone())),
            None => Ok(QueryResult::new()),
        }
    }

    async fn close(&self) -> Result<()> {
        self.counters.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Connector handing out [`MockDatabaseClient`]s that share one response table.
#[derive(Debug, Clone)]
pub struct MockConnector {
    database: String,
    refuse: bool,
    responses: Vec<(String, MockResponse)>,
    counters: Arc<Counters>,
}

impl MockConnector {
    /// Creates a connector for the named database with no canned responses.
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            refuse: false,
            responses: Vec::new(),
            counters: Arc::default(),
        }
    }

    /// Creates a connector whose every connection attempt fails.
    pub fn refusing(database: impl Into<String>) -> Self {
        Self {
            refuse: true,
            ..Self::new(database)
        }
    }

    /// Answers SQL containing `fragment` with `result`.
    pub fn with_rows(mut self, fragment: impl Into<String>, result: QueryResult) -> Self {
        self.responses
            .push((fragment.into(), MockResponse::Rows(result)));
        self
    }

    /// Fails SQL containing `fragment` with a query error.
    pub fn with_failure(mut self, fragment: impl Into<String>, msg: impl Into<String>) -> Self {
        self.responses
            .push((fragment.into(), MockResponse::Fail(msg.into())));
        self
    }

    /// Number of clients opened so far.
    pub fn opened(&self) -> usize {
        self.counters.opened.load(Ordering::SeqCst)
    }

    /// Number of clients closed so far.
    pub fn closed(&self) -> usize {
        self.counters.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for MockConnector {
    fn database_name(&self) -> &str {
        &self.database
    }

    async fn open(&self) -> Result<Box<dyn DatabaseClient>> {
        if self.refuse {
            return Err(ReportError::connection(format!(
                "Cannot connect to database '{}'",
                self.database
            )));
        }

        self.counters.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockDatabaseClient {
            responses: Arc::new(self.responses.clone()),
            counters: Arc::clone(&self.counters),
        }))
    }
}
