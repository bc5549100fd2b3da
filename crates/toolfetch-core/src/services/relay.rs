//! Gateway relay - hands the default gateway to the ping-options window.
//!
//! The gateway may be discovered before the window opens, while it is
//! loading, after it is ready, or never. The relay caches every discovered
//! value and emits [`AppEvent::GatewayLoaded`] only towards a window that
//! has announced itself ready:
//!
//! | window          | gateway discovered        | window becomes ready     |
//! |-----------------|---------------------------|--------------------------|
//! | closed          | cache                     | -                        |
//! | opening         | cache                     | emit cached (if any)     |
//! | ready           | cache + emit              | emit cached (if any)     |
//!
//! The cache is never cleared; a later refresh overwrites it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::events::AppEvent;
use crate::ports::{AppEventEmitter, GatewayObserver};

/// Lifecycle of the single tracked ping-options window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PingWindowSlot {
    #[default]
    Closed,
    /// Creation requested; the window has not announced readiness.
    Opening(String),
    /// The window subscribed to gateway events.
    Ready(String),
}

impl PingWindowSlot {
    fn label(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Opening(label) | Self::Ready(label) => Some(label),
        }
    }
}

#[derive(Debug, Default)]
struct RelayState {
    gateway: Option<String>,
    window: PingWindowSlot,
}

/// Main-window owned cache plus ready/emit handshake.
pub struct GatewayRelay {
    state: Mutex<RelayState>,
    emitter: Arc<dyn AppEventEmitter>,
}

impl GatewayRelay {
    pub fn new(emitter: Arc<dyn AppEventEmitter>) -> Self {
        Self {
            state: Mutex::new(RelayState::default()),
            emitter,
        }
    }

    fn lock(&self) -> MutexGuard<'_, RelayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Last discovered gateway, if any.
    pub fn cached(&self) -> Option<String> {
        self.lock().gateway.clone()
    }

    pub fn window(&self) -> PingWindowSlot {
        self.lock().window.clone()
    }

    /// Record a discovered gateway and forward it to a ready window.
    pub fn publish(&self, gateway: &str) {
        let mut state = self.lock();
        state.gateway = Some(gateway.to_string());
        match &state.window {
            PingWindowSlot::Ready(label) => {
                info!(window = %label, gateway, "Relaying gateway to ping window");
                self.emitter.emit(AppEvent::gateway_loaded(gateway));
            }
            slot => debug!(?slot, gateway, "Gateway cached"),
        }
    }

    /// Start tracking a newly requested window, replacing any previous one.
    ///
    /// A window with the same label that is already ready stays ready, so
    /// discoveries during the request keep reaching it. Returns the slot
    /// that was there before, for [`restore_window`](Self::restore_window).
    pub fn window_opening(&self, label: &str) -> PingWindowSlot {
        let mut state = self.lock();
        let previous = state.window.clone();
        if previous != PingWindowSlot::Ready(label.to_string()) {
            state.window = PingWindowSlot::Opening(label.to_string());
        }
        previous
    }

    /// Put back a slot returned by [`window_opening`](Self::window_opening).
    pub fn restore_window(&self, slot: PingWindowSlot) {
        self.lock().window = slot;
    }

    /// The window labelled `label` finished loading and subscribed.
    ///
    /// Emits the cached gateway, if one is known. Signals from windows the
    /// relay is not tracking are ignored.
    pub fn window_ready(&self, label: &str) {
        let mut state = self.lock();
        if state.window.label() != Some(label) {
            debug!(window = label, tracked = ?state.window, "Ignoring ready signal from untracked window");
            return;
        }
        state.window = PingWindowSlot::Ready(label.to_string());
        match &state.gateway {
            Some(gateway) => {
                info!(window = label, gateway = %gateway, "Sending cached gateway to ping window");
                self.emitter.emit(AppEvent::gateway_loaded(gateway.as_str()));
            }
            None => debug!(window = label, "Ping window ready, gateway still unknown"),
        }
    }

    /// Stop tracking `label` after it failed to open or was closed.
    ///
    /// The cached gateway is kept for the next window.
    pub fn window_gone(&self, label: &str) {
        let mut state = self.lock();
        if state.window.label() == Some(label) {
            state.window = PingWindowSlot::Closed;
        }
    }
}

impl GatewayObserver for GatewayRelay {
    fn gateway_discovered(&self, gateway: &str) {
        self.publish(gateway);
    }
}

impl std::fmt::Debug for GatewayRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayRelay")
            .field("state", &*self.lock())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL: &str = "Ping-options";

    #[derive(Clone, Default)]
    struct RecordingEmitter(Arc<Mutex<Vec<AppEvent>>>);

    impl RecordingEmitter {
        fn events(&self) -> Vec<AppEvent> {
            self.0.lock().unwrap().clone()
        }
    }

    impl AppEventEmitter for RecordingEmitter {
        fn emit(&self, event: AppEvent) {
            self.0.lock().unwrap().push(event);
        }

        fn clone_box(&self) -> Box<dyn AppEventEmitter> {
            Box::new(self.clone())
        }
    }

    fn relay() -> (GatewayRelay, RecordingEmitter) {
        let emitter = RecordingEmitter::default();
        (GatewayRelay::new(Arc::new(emitter.clone())), emitter)
    }

    #[test]
    fn discovery_without_window_only_caches() {
        let (relay, emitter) = relay();
        relay.publish("192.168.1.1");
        assert_eq!(relay.cached().as_deref(), Some("192.168.1.1"));
        assert!(emitter.events().is_empty());
    }

    #[test]
    fn known_gateway_is_sent_when_window_becomes_ready() {
        let (relay, emitter) = relay();
        relay.publish("192.168.1.1");
        relay.window_opening(LABEL);
        assert!(emitter.events().is_empty());

        relay.window_ready(LABEL);
        assert_eq!(emitter.events(), vec![AppEvent::gateway_loaded("192.168.1.1")]);
    }

    #[test]
    fn unknown_gateway_is_sent_once_on_discovery() {
        let (relay, emitter) = relay();
        relay.window_opening(LABEL);
        relay.window_ready(LABEL);
        assert!(emitter.events().is_empty());

        relay.publish("10.0.0.1");
        assert_eq!(emitter.events(), vec![AppEvent::gateway_loaded("10.0.0.1")]);
    }

    #[test]
    fn discovery_while_window_loading_waits_for_ready() {
        let (relay, emitter) = relay();
        relay.window_opening(LABEL);
        relay.publish("10.0.0.1");
        assert!(emitter.events().is_empty());

        relay.window_ready(LABEL);
        assert_eq!(emitter.events(), vec![AppEvent::gateway_loaded("10.0.0.1")]);
    }

    #[test]
    fn later_refresh_overwrites_and_last_event_wins() {
        let (relay, emitter) = relay();
        relay.window_opening(LABEL);
        relay.window_ready(LABEL);
        relay.publish("10.0.0.1");
        relay.publish("10.0.0.254");

        assert_eq!(relay.cached().as_deref(), Some("10.0.0.254"));
        assert_eq!(
            emitter.events().last(),
            Some(&AppEvent::gateway_loaded("10.0.0.254"))
        );
    }

    #[test]
    fn failed_window_keeps_cache_for_next_window() {
        let (relay, emitter) = relay();
        relay.window_opening(LABEL);
        relay.window_gone(LABEL);
        assert_eq!(relay.window(), PingWindowSlot::Closed);

        relay.publish("192.168.0.1");
        assert!(emitter.events().is_empty());

        relay.window_opening(LABEL);
        relay.window_ready(LABEL);
        assert_eq!(emitter.events(), vec![AppEvent::gateway_loaded("192.168.0.1")]);
    }

    #[test]
    fn restoring_previous_slot_keeps_ready_window_tracked() {
        let (relay, emitter) = relay();
        assert_eq!(relay.window_opening(LABEL), PingWindowSlot::Closed);
        relay.window_ready(LABEL);

        let previous = relay.window_opening(LABEL);
        assert_eq!(previous, PingWindowSlot::Ready(LABEL.into()));
        relay.restore_window(previous);

        relay.publish("10.1.1.1");
        assert_eq!(emitter.events(), vec![AppEvent::gateway_loaded("10.1.1.1")]);
    }

    #[test]
    fn reopening_ready_window_keeps_relaying() {
        let (relay, emitter) = relay();
        relay.window_opening(LABEL);
        relay.window_ready(LABEL);

        let previous = relay.window_opening(LABEL);
        assert_eq!(relay.window(), PingWindowSlot::Ready(LABEL.into()));
        relay.publish("192.168.1.1");
        relay.restore_window(previous);

        assert_eq!(emitter.events(), vec![AppEvent::gateway_loaded("192.168.1.1")]);
    }

    #[test]
    fn ready_from_untracked_window_is_ignored() {
        let (relay, emitter) = relay();
        relay.publish("192.168.0.1");
        relay.window_ready("Somebody-else");
        assert!(emitter.events().is_empty());
        assert_eq!(relay.window(), PingWindowSlot::Closed);
    }
}
