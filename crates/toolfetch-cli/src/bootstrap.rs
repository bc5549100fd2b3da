//! Composition root.
//!
//! Wires the replay backend, the recording dialog sink, and the in-process
//! window factory into a `MainWindow`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use toolfetch_core::{CommandInvoker, DashboardSettings, EventHub};
use toolfetch_gui::{FixtureInvoker, InProcessWindows, MainWindow, MainWindowDeps, RecordingDialogs};
use tracing::debug;

/// Inputs resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub settings_path: Option<PathBuf>,
    pub fixture_path: Option<PathBuf>,
}

/// Everything a handler needs.
pub struct CliContext {
    pub window: MainWindow,
    pub windows: Arc<InProcessWindows>,
    pub dialogs: Arc<RecordingDialogs>,
}

/// Build the context. Must run inside the tokio runtime.
pub fn bootstrap(config: &CliConfig) -> anyhow::Result<CliContext> {
    let settings = match &config.settings_path {
        Some(path) => DashboardSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => DashboardSettings::with_defaults(),
    };

    let invoker: Arc<dyn CommandInvoker> = match &config.fixture_path {
        Some(path) => Arc::new(FixtureInvoker::load(path)?),
        None => Arc::new(FixtureInvoker::sample()),
    };
    debug!(?config, "Bootstrapping dashboard");

    let hub = EventHub::with_defaults();
    let dialogs = Arc::new(RecordingDialogs::new());
    let windows = Arc::new(InProcessWindows::new(
        hub.clone(),
        Arc::clone(&invoker),
        dialogs.clone(),
        settings.internet_target.clone(),
    ));
    let deps = MainWindowDeps::new(invoker, dialogs.clone(), windows.clone(), hub, settings);

    Ok(CliContext {
        window: MainWindow::new(deps),
        windows,
        dialogs,
    })
}
