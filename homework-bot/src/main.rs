//! Homework Bot
//!
//! A polling agent that watches the Practicum review API and forwards
//! homework verdicts to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and tuning from the environment (and `.env`)
//! - Repositories: trait seams over the Practicum and Telegram clients
//! - Services: response validation, status parsing, notification delivery
//! - Scheduler: the fixed-period polling loop
//!
//! Missing credentials stop the process before any request is made. Once the
//! loop is running, no single failure ends it.

mod config;
mod error;
mod repository;
mod scheduler;
mod service;
#[cfg(test)]
mod test_helpers;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::scheduler::StatusPoller;
use crate::service::{Notifier, StatusParser};
use homework_client::{PracticumClient, TelegramClient};
use homework_core::domain::verdict::VerdictCatalog;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before the filter reads RUST_LOG
    let dotenv = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=debug,homework_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    info!("Starting homework bot");

    let config = match load_config(|key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            error!(fatal = true, "{}. Программа завершает работу.", e);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded configuration: chat_id={}, retry_period={:?}",
        config.credentials.telegram_chat_id, config.retry_period
    );

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let practicum = Arc::new(PracticumClient::with_client(
        config.practicum_endpoint.clone(),
        config.credentials.practicum_token.clone(),
        http.clone(),
    ));
    let telegram = Arc::new(TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.credentials.telegram_token.clone(),
        http,
    ));

    info!("API clients initialized");

    let catalog = VerdictCatalog::default();
    debug!("Verdict catalog holds {} statuses", catalog.len());

    let poller = StatusPoller::new(
        practicum,
        StatusParser::new(catalog),
        Notifier::new(telegram, config.credentials.telegram_chat_id.clone()),
        config.retry_period,
    );

    info!(
        "Bot initialized, querying from_date={}",
        poller.cursor().timestamp()
    );

    poller.run().await;

    Ok(())
}

/// Loads and validates configuration from a variable source
fn load_config<F>(lookup: F) -> std::result::Result<Config, config::ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = Config::from_lookup(lookup)?;
    config.validate()?;
    Ok(config)
}
