//! Common test utilities.
//!
//! A scriptable backend whose commands can be held back until released,
//! plus a fully wired main window.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::{broadcast, oneshot};
use toolfetch_core::commands::BUTTON_OPEN;
use toolfetch_core::{
    AppEvent, BackendCommand, CommandError, CommandInvoker, DashboardSettings, EventHub,
    GatewayRelay, PingOptions, PingOptionsState, PingWindowSlot, WindowError, WindowFactory,
    WindowSpec,
};
use toolfetch_gui::{InProcessWindows, MainWindow, MainWindowDeps, RecordingDialogs};

pub const PING_LABEL: &str = "Ping-options";
pub const GATEWAY: &str = "192.168.1.1";
pub const GATEWAY_MAC: &str = "AA:BB:CC:DD:EE:FF";
pub const LOCAL_ADDRESS: &str = "192.168.1.37";

/// Responses of a healthy machine.
pub fn sample_responses() -> HashMap<String, Result<Value, CommandError>> {
    [
        (BackendCommand::OsVersion, json!("Windows 10 Home")),
        (BackendCommand::Username, json!("DESKTOP \\ alice")),
        (BackendCommand::CpuModel, json!("AMD Ryzen 5 3600 6-Core Processor")),
        (BackendCommand::CpuStats, json!([12, 3593])),
        (BackendCommand::Ram, json!({ "total": 16_384_000u64 })),
        (BackendCommand::Disk, json!([524_288_000u64, 262_144_000u64])),
        (BackendCommand::GatewayAndMac, json!([GATEWAY, GATEWAY_MAC])),
        (BackendCommand::LocalIpv4AndMask, json!([LOCAL_ADDRESS, "255.255.255.0"])),
        (BackendCommand::LocalIpv6, json!("fe80::1")),
        (BackendCommand::ExternalIpv4, json!("198.51.100.7")),
        (BackendCommand::ExternalIpv6, json!("2001:db8::7")),
    ]
    .into_iter()
    .map(|(command, value)| (command.name().to_string(), Ok(value)))
    .collect()
}

/// Releases one held-back command.
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    pub fn open(self) {
        let _ = self.0.send(());
    }
}

/// Backend with per-command scripted answers and gates.
#[derive(Default)]
pub struct GatedInvoker {
    responses: Mutex<HashMap<String, Result<Value, CommandError>>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl GatedInvoker {
    pub fn healthy() -> Self {
        let mut responses = sample_responses();
        responses.insert(BUTTON_OPEN.to_string(), Ok(Value::Null));
        Self {
            responses: Mutex::new(responses),
            gates: Mutex::default(),
        }
    }

    pub fn respond(&self, command: BackendCommand, value: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(command.name().to_string(), Ok(value));
    }

    pub fn fail(&self, command: BackendCommand, reason: &str) {
        self.responses.lock().unwrap().insert(
            command.name().to_string(),
            Err(CommandError::Rejected(reason.to_string())),
        );
    }

    /// Hold `command` back until the returned gate is opened.
    pub fn hold(&self, command: BackendCommand) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .unwrap()
            .insert(command.name().to_string(), rx);
        Gate(tx)
    }
}

#[async_trait]
impl CommandInvoker for GatedInvoker {
    async fn invoke(&self, command: &str, _args: Option<Value>) -> Result<Value, CommandError> {
        let gate = self.gates.lock().unwrap().remove(command);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.responses
            .lock()
            .unwrap()
            .get(command)
            .cloned()
            .unwrap_or_else(|| Err(CommandError::Unknown(command.to_string())))
    }
}

/// Window factory whose next creation can be held back.
pub struct SlowWindows {
    inner: Arc<InProcessWindows>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl SlowWindows {
    pub fn new(inner: Arc<InProcessWindows>) -> Self {
        Self {
            inner,
            gate: Mutex::default(),
        }
    }

    /// Hold the next `create_window` until the returned gate is opened.
    pub fn hold(&self) -> Gate {
        let (tx, rx) = oneshot::channel();
        *self.gate.lock().unwrap() = Some(rx);
        Gate(tx)
    }
}

#[async_trait]
impl WindowFactory for SlowWindows {
    async fn create_window(&self, spec: &WindowSpec) -> Result<(), WindowError> {
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.inner.create_window(spec).await
    }
}

/// A main window wired to in-process adapters.
pub struct App {
    pub window: MainWindow,
    pub windows: Arc<InProcessWindows>,
    pub factory: Arc<SlowWindows>,
    pub dialogs: Arc<RecordingDialogs>,
    pub invoker: Arc<GatedInvoker>,
    pub hub: EventHub,
}

pub fn app(invoker: GatedInvoker) -> App {
    app_with(invoker, DashboardSettings::with_defaults())
}

pub fn app_with(invoker: GatedInvoker, settings: DashboardSettings) -> App {
    let hub = EventHub::with_defaults();
    let invoker = Arc::new(invoker);
    let dialogs = Arc::new(RecordingDialogs::new());
    let windows = Arc::new(InProcessWindows::new(
        hub.clone(),
        invoker.clone(),
        dialogs.clone(),
        settings.internet_target.clone(),
    ));
    let factory = Arc::new(SlowWindows::new(windows.clone()));
    let deps = MainWindowDeps::new(
        invoker.clone(),
        dialogs.clone(),
        factory.clone(),
        hub.clone(),
        settings,
    );
    App {
        window: MainWindow::new(deps),
        windows,
        factory,
        dialogs,
        invoker,
        hub,
    }
}

impl App {
    /// Open the ping window and wait until the relay sees it ready.
    pub async fn open_ping_window(&self) -> Arc<PingOptions> {
        self.window.open_ping_window().await.unwrap();
        wait_for_slot(
            self.window.relay(),
            &PingWindowSlot::Ready(PING_LABEL.to_string()),
        )
        .await;
        self.windows.window(PING_LABEL).unwrap()
    }
}

pub async fn wait_for_slot(relay: &GatewayRelay, expected: &PingWindowSlot) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while relay.window() != *expected {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("relay never reached the expected window state");
}

/// Wait until the ping window's gateway choice is enabled.
pub async fn wait_for_gateway(window: &PingOptions) -> String {
    let mut rx = window.watch();
    let state = tokio::time::timeout(
        Duration::from_secs(2),
        rx.wait_for(PingOptionsState::gateway_enabled),
    )
    .await
    .expect("gateway never arrived")
    .unwrap()
    .clone();
    state.gateway.unwrap()
}

/// Let spawned listeners run for a moment.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

/// Gateway values emitted so far on `events`.
pub fn drain_gateways(events: &mut broadcast::Receiver<AppEvent>) -> Vec<String> {
    let mut gateways = Vec::new();
    while let Ok(event) = events.try_recv() {
        if let AppEvent::GatewayLoaded { gateway } = event {
            gateways.push(gateway);
        }
    }
    gateways
}
