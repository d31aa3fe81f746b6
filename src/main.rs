// src/main.rs

//! formpost
//!
//! Entry point for the formpost CLI.
//!
//! This binary submits url-encoded form data to a configured endpoint and
//! reports a success/error outcome. It delegates all real work to the
//! `runner` module.
//!
//! Responsibilities of this file:
//! - Parse CLI arguments
//! - Initialise logging
//! - Hand off execution to the runner
//!
//! There is intentionally *no business logic* here.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Program entry point.
///
/// Uses Tokio because both the submitter and the capture server are
/// asynchronous end to end.
#[tokio::main]
async fn main() -> Result<()> {
    // `.env` is optional; a missing file is not an error.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("formpost=info,tower_http=info")),
        )
        .init();

    // Parse CLI arguments (send / serve / init)
    let cli = formpost::cli::Cli::parse();

    // Delegate execution to the runner
    formpost::runner::run(cli).await
}
