//! The dashboard window.
//!
//! `MainWindow` owns every piece of state the dashboard needs for its
//! lifetime: the board, the aggregator, the gateway relay, and the ready
//! listener for the ping-options window.

use std::sync::Arc;

use toolfetch_core::events::names;
use toolfetch_core::{
    AppEvent, CommandGateway, CommandInvoker, Dashboard, DashboardSettings, DialogPort, EventHub,
    GatewayRelay, InformationAggregator, RefreshCycle, Subscription, SystemTool, TableId,
    TableSnapshot, WindowError, WindowFactory, WindowSpec,
};
use tracing::{debug, info, warn};

use crate::deps::MainWindowDeps;

pub struct MainWindow {
    settings: DashboardSettings,
    aggregator: InformationAggregator,
    relay: Arc<GatewayRelay>,
    invoker: Arc<dyn CommandInvoker>,
    dialogs: Arc<dyn DialogPort>,
    windows: Arc<dyn WindowFactory>,
    hub: EventHub,
    _ready_listener: Subscription,
}

impl MainWindow {
    /// Build the window and start listening for ping-window readiness.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(deps: MainWindowDeps) -> Self {
        let MainWindowDeps {
            invoker,
            dialogs,
            windows,
            hub,
            settings,
        } = deps;

        let dashboard = Arc::new(Dashboard::new(&settings));
        let relay = Arc::new(GatewayRelay::new(Arc::new(hub.clone())));
        let gateway = CommandGateway::new(Arc::clone(&invoker), Arc::clone(&dialogs));
        let aggregator = InformationAggregator::new(gateway, dashboard, relay.clone());

        let ready_relay = Arc::clone(&relay);
        let ready_listener = hub.listen(names::PING_WINDOW_LOADED, move |event| {
            if let AppEvent::PingWindowLoaded { label } = event {
                ready_relay.window_ready(&label);
            }
        });

        Self {
            settings,
            aggregator,
            relay,
            invoker,
            dialogs,
            windows,
            hub,
            _ready_listener: ready_listener,
        }
    }

    /// Page load: run the first refresh cycle.
    pub fn load(&self) -> RefreshCycle {
        self.aggregator.refresh()
    }

    /// Refresh when `key` is the configured hotkey.
    pub fn on_key(&self, key: &str) -> Option<RefreshCycle> {
        if key != self.settings.refresh_key {
            return None;
        }
        debug!(key, "Refresh hotkey pressed");
        Some(self.aggregator.refresh())
    }

    /// Ask the windowing layer for the ping-options window.
    ///
    /// The relay tracks a new window as opening until it announces itself;
    /// an already ready window stays ready. A creation error is shown as a
    /// dialog and the relay goes back to its previous slot, keeping the
    /// cached gateway.
    pub async fn open_ping_window(&self) -> Result<(), WindowError> {
        let spec = WindowSpec::from(&self.settings.ping_window);
        let previous = self.relay.window_opening(&spec.label);
        info!(window = %spec.label, "Opening ping window");

        if let Err(e) = self.windows.create_window(&spec).await {
            warn!(window = %spec.label, error = %e, "Ping window failed to open");
            self.dialogs
                .message(&format!("failed to open window: {e}"), "Window error");
            self.relay.restore_window(previous);
            return Err(e);
        }
        Ok(())
    }

    /// The windowing layer destroyed the window labelled `label`.
    pub fn ping_window_closed(&self, label: &str) {
        debug!(window = label, "Ping window closed");
        self.relay.window_gone(label);
    }

    pub async fn launch_tool(&self, tool: SystemTool) -> bool {
        tool.launch(self.invoker.as_ref(), self.dialogs.as_ref())
            .await
    }

    pub fn snapshot(&self, table: TableId) -> TableSnapshot {
        self.dashboard().snapshot(table)
    }

    pub fn dashboard(&self) -> &Arc<Dashboard> {
        self.aggregator.dashboard()
    }

    pub fn relay(&self) -> &Arc<GatewayRelay> {
        &self.relay
    }

    pub const fn hub(&self) -> &EventHub {
        &self.hub
    }

    pub const fn settings(&self) -> &DashboardSettings {
        &self.settings
    }
}

impl std::fmt::Debug for MainWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainWindow")
            .field("relay", &self.relay)
            .field("generation", &self.dashboard().generation())
            .finish_non_exhaustive()
    }
}
