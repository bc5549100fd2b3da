//! Subcommand handlers.

use std::time::Duration;

use anyhow::Context;
use toolfetch_core::{PingOptionsState, TableId};
use tracing::info;

use crate::bootstrap::CliContext;
use crate::presentation::{format_dialogs, format_table};

/// Outcome of `toolfetch ping`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingReport {
    /// Gateway the window received, if any.
    pub gateway: Option<String>,
    /// Whether a ping was started.
    pub pinged: bool,
}

pub async fn refresh(ctx: &CliContext, json: bool) -> anyhow::Result<()> {
    ctx.window.load().join().await;

    let tables = [
        ctx.window.snapshot(TableId::Hardware),
        ctx.window.snapshot(TableId::Network),
    ];
    if json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
    } else {
        for table in &tables {
            println!("{}", format_table(table));
        }
    }

    let dialogs = ctx.dialogs.shown();
    if !dialogs.is_empty() {
        eprint!("{}", format_dialogs(&dialogs));
    }
    Ok(())
}

/// Open the ping window before or after a refresh and wait for the gateway.
pub async fn ping(
    ctx: &CliContext,
    open_first: bool,
    wait: Duration,
    ping_gateway: bool,
) -> anyhow::Result<PingReport> {
    let label = ctx.window.settings().ping_window.label.clone();

    if open_first {
        ctx.window.open_ping_window().await?;
        ctx.window.load().join().await;
    } else {
        ctx.window.load().join().await;
        ctx.window.open_ping_window().await?;
    }

    let window = ctx
        .windows
        .window(&label)
        .with_context(|| format!("window {label} disappeared"))?;

    let mut state = window.watch();
    // Timing out just means the gateway never arrived.
    let _ = tokio::time::timeout(wait, state.wait_for(PingOptionsState::gateway_enabled)).await;

    let gateway = window.state().gateway;
    let pinged = ping_gateway && window.choose_gateway() && window.ping().await;
    info!(?gateway, pinged, "Ping window settled");

    Ok(PingReport { gateway, pinged })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{CliConfig, bootstrap};
    use std::io::Write;

    fn ctx_with_fixture(json: &str) -> (CliContext, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        let config = CliConfig {
            settings_path: None,
            fixture_path: Some(file.path().to_path_buf()),
        };
        (bootstrap(&config).unwrap(), file)
    }

    #[tokio::test]
    async fn test_ping_after_refresh_receives_gateway() {
        let ctx = bootstrap(&CliConfig::default()).unwrap();
        let report = ping(&ctx, false, Duration::from_secs(1), true).await.unwrap();
        assert_eq!(report.gateway.as_deref(), Some("192.168.178.1"));
        assert!(report.pinged);
    }

    #[tokio::test]
    async fn test_ping_before_refresh_receives_gateway() {
        let ctx = bootstrap(&CliConfig::default()).unwrap();
        let report = ping(&ctx, true, Duration::from_secs(1), false).await.unwrap();
        assert_eq!(report.gateway.as_deref(), Some("192.168.178.1"));
        assert!(!report.pinged);
    }

    #[tokio::test]
    async fn test_ping_without_gateway_stays_disabled() {
        let (ctx, _file) = ctx_with_fixture(
            r#"{ "failures": { "gateway_and_mac": "no route" } }"#,
        );
        let report = ping(&ctx, false, Duration::from_millis(50), true).await.unwrap();
        assert_eq!(report.gateway, None);
        assert!(!report.pinged);
        assert!(!ctx.dialogs.with_title("Error on gateway_and_mac").is_empty());
    }

    #[tokio::test]
    async fn test_refresh_prints_without_error() {
        let (ctx, _file) = ctx_with_fixture(r#"{ "failures": { "ram": "denied" } }"#);
        refresh(&ctx, true).await.unwrap();
        assert_eq!(ctx.dialogs.with_title("Error on ram").len(), 1);
    }
}
