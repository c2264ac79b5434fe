//! Report query integration tests.
//!
//! Loads `tests/fixtures/news.sql` into temporary tables on one connection
//! and runs the report queries against it.

use news_report::db::{DatabaseClient, PostgresClient};
use news_report::report::{format_report, queries, rows_from_result, ResultRow};
use pretty_assertions::assert_eq;
use sqlx::{Connection, PgConnection};

const FIXTURE: &str = include_str!("../fixtures/news.sql");

/// Helper to get test database URL from environment.
fn get_test_database_url() -> Option<String> {
    std::env::var("DATABASE_URL").ok()
}

/// Helper to create a client whose only connection holds the fixture data.
async fn get_fixture_client() -> Option<PostgresClient> {
    let url = get_test_database_url()?;
    let mut conn = PgConnection::connect(&url).await.ok()?;

    sqlx::raw_sql(FIXTURE)
        .execute(&mut conn)
        .await
        .expect("fixture should load");

    Some(PostgresClient::from_connection(conn))
}

async fn report_rows(client: &PostgresClient, sql: &str) -> Vec<ResultRow> {
    let result = client.execute_query(sql).await.unwrap();
    rows_from_result(&result).unwrap()
}

fn pairs(rows: &[ResultRow]) -> Vec<(&str, &str)> {
    rows.iter()
        .map(|r| (r.label.as_str(), r.value.as_str()))
        .collect()
}

#[tokio::test]
async fn test_popular_articles_with_limit() {
    let Some(client) = get_fixture_client().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let rows = report_rows(&client, &queries::popular_articles(Some(2))).await;
    assert_eq!(
        pairs(&rows),
        vec![("Foo Title", "3 views"), ("Bar Title", "1 views")]
    );
    assert_eq!(
        format_report(&rows).unwrap(),
        "Foo Title - 3 views\nBar Title - 1 views"
    );

    client.close().await.unwrap();
}

#[tokio::test]
async fn test_popular_articles_limit_truncates() {
    let Some(client) = get_fixture_client().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let rows = report_rows(&client, &queries::popular_articles(Some(1))).await;
    assert_eq!(pairs(&rows), vec![("Foo Title", "3 views")]);

    // Unlimited returns every article that has any hits.
    let rows = report_rows(&client, &queries::popular_articles(None)).await;
    assert_eq!(rows.len(), 2);

    client.close().await.unwrap();
}

#[tokio::test]
async fn test_popular_authors() {
    let Some(client) = get_fixture_client().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let rows = report_rows(&client, &queries::popular_authors(None)).await;
    assert_eq!(
        pairs(&rows),
        vec![
            ("Ursula La Multa", "3 views"),
            ("Rudolf von Treppenwitz", "1 views"),
        ]
    );

    let rows = report_rows(&client, &queries::popular_authors(Some(1))).await;
    assert_eq!(rows.len(), 1);

    client.close().await.unwrap();
}

#[tokio::test]
async fn test_days_with_high_error_rate() {
    let Some(client) = get_fixture_client().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    // July 4 (0.50%) and July 5 (exactly 1%) stay below the threshold.
    let rows = report_rows(&client, &queries::days_with_high_error_rate(None)).await;
    assert_eq!(
        pairs(&rows),
        vec![
            ("July 06, 2016", "1.50% errors"),
            ("July 01, 2016", "20.00% errors"),
            ("July 03, 2016", "33.33% errors"),
        ]
    );

    let rows = report_rows(&client, &queries::days_with_high_error_rate(Some(2))).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].label, "July 06, 2016");

    client.close().await.unwrap();
}

#[tokio::test]
async fn test_missing_table_is_query_error() {
    let Some(client) = get_fixture_client().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let err = client
        .execute_query("SELECT path FROM log_archive_xyz")
        .await
        .unwrap_err();
    assert_eq!(err.category(), "Query Error");
    assert!(err.to_string().contains("log_archive_xyz"));

    client.close().await.unwrap();
}
