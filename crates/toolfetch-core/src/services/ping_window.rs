//! Ping-options window controller.
//!
//! Opening the window subscribes to `gateway-loaded` and then announces
//! readiness with `ping-window-loaded`, so a gateway sent in reply to the
//! announcement cannot be missed. The gateway choice stays disabled until
//! a gateway arrives; there is no timeout and no polling.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::tools::launch_program;
use crate::events::{AppEvent, EventHub, Subscription, names};
use crate::ports::{CommandInvoker, DialogPort};

/// Observable state of the ping-options form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PingOptionsState {
    /// Gateway received from the main window; `None` keeps the gateway
    /// choice disabled.
    pub gateway: Option<String>,
    /// Current content of the address input.
    pub address: String,
}

impl PingOptionsState {
    pub const fn gateway_enabled(&self) -> bool {
        self.gateway.is_some()
    }
}

/// A live ping-options window.
pub struct PingOptions {
    label: String,
    state: Arc<watch::Sender<PingOptionsState>>,
    invoker: Arc<dyn CommandInvoker>,
    dialogs: Arc<dyn DialogPort>,
    internet_target: String,
    _gateway_listener: Subscription,
}

impl PingOptions {
    /// Run the window's ready sequence on `hub`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn open(
        label: impl Into<String>,
        hub: &EventHub,
        invoker: Arc<dyn CommandInvoker>,
        dialogs: Arc<dyn DialogPort>,
        internet_target: impl Into<String>,
    ) -> Self {
        let label = label.into();
        let (sender, _) = watch::channel(PingOptionsState::default());
        let state = Arc::new(sender);

        let listener_state = Arc::clone(&state);
        let listener_label = label.clone();
        let gateway_listener = hub.listen(names::GATEWAY_LOADED, move |event| {
            if let AppEvent::GatewayLoaded { gateway } = event {
                debug!(window = %listener_label, gateway = %gateway, "Gateway choice enabled");
                listener_state.send_modify(|s| s.gateway = Some(gateway));
            }
        });

        hub.emit(AppEvent::ping_window_loaded(label.as_str()));

        Self {
            label,
            state,
            invoker,
            dialogs,
            internet_target: internet_target.into(),
            _gateway_listener: gateway_listener,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> PingOptionsState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change.
    pub fn watch(&self) -> watch::Receiver<PingOptionsState> {
        self.state.subscribe()
    }

    pub fn gateway_enabled(&self) -> bool {
        self.state.borrow().gateway_enabled()
    }

    pub fn set_address(&self, address: impl Into<String>) {
        let address = address.into();
        self.state.send_modify(|s| s.address = address);
    }

    /// Fill the address input with the internet target.
    pub fn choose_internet(&self) {
        self.set_address(self.internet_target.clone());
    }

    /// Fill the address input with the gateway. Refused while disabled.
    pub fn choose_gateway(&self) -> bool {
        let Some(gateway) = self.state.borrow().gateway.clone() else {
            return false;
        };
        self.set_address(gateway);
        true
    }

    /// Start a continuous ping of the current address.
    ///
    /// A blank address does nothing.
    pub async fn ping(&self) -> bool {
        let address = self.state.borrow().address.trim().to_string();
        if address.is_empty() {
            return false;
        }
        launch_program(
            self.invoker.as_ref(),
            self.dialogs.as_ref(),
            "cmd",
            &["/c", "start", "ping", "-t", address.as_str()],
            false,
        )
        .await
    }
}

impl std::fmt::Debug for PingOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PingOptions")
            .field("label", &self.label)
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
