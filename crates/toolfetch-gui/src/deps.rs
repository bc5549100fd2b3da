//! Dependency injection for `MainWindow`.
//!
//! Every collaborator is injected as a trait object so the window logic
//! stays independent of the real backend and windowing layer.

use std::sync::Arc;

use toolfetch_core::{CommandInvoker, DashboardSettings, DialogPort, EventHub, WindowFactory};

/// Dependencies required to construct a `MainWindow`.
///
/// Fields are private; use [`MainWindowDeps::new`].
///
/// ```ignore
/// let deps = MainWindowDeps::new(invoker, dialogs, windows, hub, settings);
/// let window = MainWindow::new(deps);
/// ```
pub struct MainWindowDeps {
    /// Backend command transport.
    pub(crate) invoker: Arc<dyn CommandInvoker>,
    pub(crate) dialogs: Arc<dyn DialogPort>,
    /// Creates the ping-options window.
    pub(crate) windows: Arc<dyn WindowFactory>,
    /// Process-wide event bus shared with every window.
    pub(crate) hub: EventHub,
    pub(crate) settings: DashboardSettings,
}

impl MainWindowDeps {
    pub fn new(
        invoker: Arc<dyn CommandInvoker>,
        dialogs: Arc<dyn DialogPort>,
        windows: Arc<dyn WindowFactory>,
        hub: EventHub,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            invoker,
            dialogs,
            windows,
            hub,
            settings,
        }
    }
}
