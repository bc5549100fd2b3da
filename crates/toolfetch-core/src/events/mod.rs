//! Cross-window events.
//!
//! The main window and the ping-options window only talk through these
//! events. [`EventHub`] is the in-process bus carrying them.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "gateway_loaded", "gateway": "192.168.1.1" }
//! ```

mod hub;

use serde::{Deserialize, Serialize};

pub use hub::{EventHub, Subscription};

/// Event name constants.
///
/// Keep strings stable; window scripts subscribe by name.
pub mod names {
    pub const GATEWAY_LOADED: &str = "gateway-loaded";
    pub const PING_WINDOW_LOADED: &str = "ping-window-loaded";
}

/// Events exchanged between windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// The default gateway address is known.
    GatewayLoaded {
        gateway: String,
    },

    /// A ping-options window finished loading and subscribed to
    /// [`AppEvent::GatewayLoaded`].
    PingWindowLoaded {
        /// Label of the window that became ready.
        label: String,
    },
}

impl AppEvent {
    pub fn gateway_loaded(gateway: impl Into<String>) -> Self {
        Self::GatewayLoaded {
            gateway: gateway.into(),
        }
    }

    pub fn ping_window_loaded(label: impl Into<String>) -> Self {
        Self::PingWindowLoaded {
            label: label.into(),
        }
    }

    /// Get the event name used for subscriptions.
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::GatewayLoaded { .. } => names::GATEWAY_LOADED,
            Self::PingWindowLoaded { .. } => names::PING_WINDOW_LOADED,
        }
    }
}
