//! CLI entry point.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use toolfetch_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads TOOLFETCH_CONFIG
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig {
        settings_path: cli.config,
        fixture_path: cli.fixture,
    };
    let ctx = bootstrap(&config)?;

    match cli.command {
        Commands::Refresh { json } => handlers::refresh(&ctx, json).await?,
        Commands::Ping {
            open_first,
            wait_ms,
            ping_gateway,
        } => {
            let report = handlers::ping(
                &ctx,
                open_first,
                Duration::from_millis(wait_ms),
                ping_gateway,
            )
            .await?;
            match &report.gateway {
                Some(gateway) => println!("gateway choice: enabled ({gateway})"),
                None => println!("gateway choice: disabled"),
            }
            if ping_gateway {
                println!("ping started: {}", report.pinged);
            }
        }
    }

    Ok(())
}
