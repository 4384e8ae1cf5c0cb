use std::sync::Arc;

use clap::Parser;
use quoteline::Quoteline;
use quoteline::config::ServerConfig;
use quoteline_core::{QuotelineConnector, QuotelineError};
use quoteline_mock::MockConnector;
use quoteline_yfinance::YfConnector;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn connector(cfg: &ServerConfig) -> Result<Arc<dyn QuotelineConnector>, QuotelineError> {
    if cfg.use_mock {
        return Ok(Arc::new(MockConnector::new()));
    }
    Ok(Arc::new(YfConnector::with_timeout(cfg.upstream_timeout())?))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    let cfg = ServerConfig::parse();
    let conn = connector(&cfg)?;
    info!(connector = conn.name(), vendor = conn.vendor(), "using connector");

    let ql = Arc::new(Quoteline::builder().with_connector(conn).build()?);
    quoteline::http::serve(ql, &cfg, shutdown_signal()).await?;
    Ok(())
}
