//! Unbounced - main entry point
//!
//! Runs one reconciliation against the Sendinblue suppression list and exits.
//! Stdout carries the operator report; diagnostics go to stderr.

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unbounced::{
    BlockedContactRepository, BounceService, Config, ReconcileOptions,
    SendinblueBlockedContactRepository, SendinblueClient,
};

fn main() -> Result<()> {
    // RUST_LOG wins, then LOG_LEVEL, then warn
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Reconciling blocked contacts at {}", config.api_base_url);

    let client = Arc::new(SendinblueClient::new(&config));
    let repository = Arc::new(SendinblueBlockedContactRepository::new(client.clone()))
        as Arc<dyn BlockedContactRepository>;
    let service = BounceService::new(repository, ReconcileOptions::from(&config));

    let outcome = service.run();

    let metrics = client.metrics().summary();
    info!(
        "HTTP requests: {} ({} errors, avg {:.1} ms), contacts listed: {}, unblocked: {}",
        metrics.http_requests_total,
        metrics.http_errors_total,
        metrics.http_duration_avg_ms,
        metrics.contacts_fetched_total,
        metrics.contacts_unblocked_total
    );

    let summary = outcome?;
    info!(
        "Suppression list empty after {} passes, {} contacts unblocked",
        summary.passes, summary.unblocked
    );
    Ok(())
}
