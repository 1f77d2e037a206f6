//! Mirrors the structure of one Discord guild onto another.
//!
//! The binary is a one-shot batch job: it resets the target guild, recreates the
//! source's roles, categories, and channels with translated permission overwrites,
//! copies the guild name and icon, then exits.
//!
//! # Layers
//!
//! - **Service Layer** (`service/`) - The ordered mirroring phases and their orchestration
//! - **Data Layer** (`data/`) - The `GuildApi` seam, its Discord implementation, and request pacing
//! - **Model Layer** (`model/`) - Guild snapshots, creation blueprints, identity maps, and run reports
//! - **Error Layer** (`error/`) - Configuration, API, and run error types
//!
//! Supporting modules: `config` (environment configuration) and `startup`
//! (logger and client initialization).

mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;

use std::process::ExitCode;

use dioxus_logger::tracing;

use crate::{
    config::Config,
    data::{discord::DiscordGuildApi, pacing::PacedGuildApi},
    error::AppError,
    service::mirror::MirrorService,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    startup::init_logger();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Mirror failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let http = startup::setup_discord_http(&config);
    let http_client = startup::setup_reqwest_client()?;

    let api = PacedGuildApi::new(DiscordGuildApi::new(http, http_client), config.pacing.clone());

    let report = MirrorService::new(&api)
        .run(config.source_guild_id, config.target_guild_id)
        .await?;

    let totals = report.totals();
    tracing::info!(
        "Copy completed successfully! {} done, {} skipped, {} failed in {}s",
        totals.done,
        totals.skipped,
        totals.failed,
        report.elapsed().num_seconds()
    );
    for (entry, e) in report.failures() {
        tracing::warn!("Failed to {} {} {}: {}", entry.action, entry.kind, entry.name, e);
    }

    Ok(())
}
