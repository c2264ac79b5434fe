//! Connection integration tests.
//!
//! Tests database connection handling and the per-report session lifecycle.

use news_report::config::ConnectionConfig;
use news_report::db::{query_in_session, Connector, PostgresClient, PostgresConnector};

/// Helper to get test database config from environment.
fn get_test_config() -> Option<ConnectionConfig> {
    let url = std::env::var("DATABASE_URL").ok()?;
    ConnectionConfig::from_connection_string(&url).ok()
}

#[tokio::test]
async fn test_connect_and_close() {
    let Some(config) = get_test_config() else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let connector = PostgresConnector::new(config);
    let client = connector.open().await.unwrap();
    client.close().await.unwrap();
}

#[tokio::test]
async fn test_query_in_session() {
    let Some(config) = get_test_config() else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let connector = PostgresConnector::new(config);
    let result = query_in_session(&connector, "SELECT 'a'::text AS label, 'b'::text AS value")
        .await
        .unwrap();

    assert_eq!(result.columns.len(), 2);
    assert_eq!(result.columns[0].name, "label");
    assert_eq!(result.rows[0][1].as_str(), Some("b"));
}

#[tokio::test]
async fn test_missing_database() {
    let Some(mut config) = get_test_config() else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    config.database = Some("news_report_missing_db_xyz".to_string());

    let err = PostgresClient::connect(&config).await.unwrap_err();
    assert_eq!(err.category(), "Connection Error");
    assert!(err.to_string().contains("news_report_missing_db_xyz"));
}

#[tokio::test]
async fn test_connection_refused_reports_refusal() {
    // Port 1 is reserved and has nothing listening.
    let config = ConnectionConfig {
        host: Some("127.0.0.1".to_string()),
        port: Some(1),
        ..Default::default()
    };

    let err = PostgresClient::connect(&config).await.unwrap_err();
    assert_eq!(err.category(), "Connection Error");
    assert!(err
        .to_string()
        .contains("Check that the server is running"));
}
