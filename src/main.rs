// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use cognito_user_purge::{cognito_client, purge_user, Config, PurgeMode, PurgeOutcome};
use std::error::Error;
use tracing_subscriber::EnvFilter;

/// Delete the user whose phone number is `$phoneNumber` from the Cognito user
/// pool named `$poolName`.
///
/// Credentials and region are read from `AWS_ACCESS_KEY_ID`,
/// `AWS_SECRET_ACCESS_KEY` and `AWS_DEFAULT_REGION`.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Find the pool and the user, but don't delete anything.
    #[arg(long)]
    dry_run: bool,
    /// Log filter directive, e.g. "debug". Defaults to $RUST_LOG, then "info".
    #[arg(long)]
    log_filter: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let filter = match args.log_filter {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    // stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "loaded configuration");

    let mode = if args.dry_run {
        PurgeMode::DryRun
    } else {
        PurgeMode::Delete
    };

    let client = cognito_client(&config).await;
    let report = purge_user(&client, &config.pool_name, &config.phone_number, mode).await?;

    println!("{}", report.user.username);
    match report.outcome {
        PurgeOutcome::Deleted(output) => println!("{output:?}"),
        PurgeOutcome::Skipped => println!(
            "dry run: {} was not deleted from {} ({})",
            report.user.username, report.pool.name, report.pool.id
        ),
    }
    Ok(())
}
