//! news-report - Plain-text analytics over a news site's access log.

use news_report::cli::Cli;
use news_report::config::Config;
use news_report::db::PostgresConnector;
use news_report::error::Result;
use news_report::logging;
use news_report::report::{run_reports, REPORTS};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    logging::init_stderr_logging();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let connection = cli.resolve_connection(&config)?;
    info!("Connection: {}", connection.display_string());

    let connector = PostgresConnector::new(connection);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_reports(&connector, REPORTS, &mut out).await
}
