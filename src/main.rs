// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava Activity Sorter
//!
//! Classifies recent Strava activities, tags commute rides and hides
//! commutes, walks and yoga from followers' home feeds.

use anyhow::Context;
use clap::Parser;
use strava_activity_sorter::{
    config::Config,
    services::{ActivitySorter, StravaClient, DEFAULT_LOOKBACK_DAYS},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "strava-activity-sorter", version)]
#[command(about = "Tag commute rides and hide commutes, walks and yoga from the Strava feed")]
struct Cli {
    /// Look-back window in days
    #[arg(default_value_t = DEFAULT_LOOKBACK_DAYS, value_parser = clap::value_parser!(u32).range(1..))]
    days: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // .env first so RUST_LOG and LOG_FORMAT from it apply.
    dotenvy::dotenv().ok();
    init_logging().context("Failed to initialize logging")?;

    let config = Config::from_env()
        .inspect_err(|e| tracing::error!(error = %e, "Failed to load configuration"))
        .context("Failed to load configuration")?;

    tracing::info!(days = cli.days, "Starting Strava activity sorter");

    let sorter = ActivitySorter::new(StravaClient::new(&config));
    let summary = sorter
        .run(cli.days)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Run aborted"))?;

    if summary.failed_updates > 0 {
        tracing::warn!(
            failed_updates = summary.failed_updates,
            "Finished with failed updates"
        );
    }

    Ok(())
}

/// Initialize logging. Human-readable by default, JSON with `LOG_FORMAT=json`.
fn init_logging() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().or_else(|_| {
        tracing_subscriber::EnvFilter::try_new("strava_activity_sorter=info,info")
    })?;

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }

    Ok(())
}
