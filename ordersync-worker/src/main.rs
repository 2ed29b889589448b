//! Order Sync Worker
//!
//! A long-running worker that mirrors high-value orders from a remote
//! order-management API.
//!
//! Architecture:
//! - Configuration: Load settings from environment or defaults
//! - Repository: Order reads behind a trait, backed by the HTTP client
//! - Services: Value filter, detail fetch with retry, report output
//! - Scheduler: The polling loop
//!
//! Every cycle lists all orders, keeps those above the value threshold,
//! fetches each one's detail in turn and prints one line per order. Any
//! error that survives the retry policy stops the worker.

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::scheduler::OrderPoller;
use crate::service::StdoutReportSink;
use ordersync_client::OrderApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only report lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ordersync_worker=info,ordersync_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Order Sync worker");

    let config = load_config()?;
    info!(
        "Loaded configuration: api_url={}, threshold={}, retry={:?}",
        config.api_url, config.threshold, config.retry
    );

    let client = build_client(&config)?;
    info!("Order API client initialized");

    let cancel = CancellationToken::new();
    spawn_shutdown_listener(cancel.clone());

    let poller = OrderPoller::new(&config, Arc::new(client), Arc::new(StdoutReportSink::default()));

    if let Err(e) = poller.run(cancel).await {
        error!("Order poller failed: {}", e);
        return Err(e).context("Order sync stopped");
    }

    info!("Order Sync worker shut down");
    Ok(())
}

/// Loads configuration from environment variables with fallback to defaults
fn load_config() -> Result<Config> {
    let config = Config::from_env();
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Builds the single HTTP client shared by every request
fn build_client(config: &Config) -> Result<OrderApiClient> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }

    let http = builder.build().context("Failed to build HTTP client")?;
    Ok(OrderApiClient::with_client(config.api_url.clone(), http))
}

/// Cancels `cancel` on Ctrl-C
fn spawn_shutdown_listener(cancel: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown requested, stopping after the current cycle");
                cancel.cancel();
            }
            Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
        }
    });
}
