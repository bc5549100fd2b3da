//! In-process event bus.
//!
//! Built on a tokio broadcast channel: every subscriber sees every event,
//! and events with the same name reach each subscriber in emission order.
//! Handlers run on their own spawned task, so `listen`/`once` must be
//! called from within a tokio runtime.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::AppEvent;
use crate::ports::AppEventEmitter;

/// Broadcast channel capacity for window events
const CHANNEL_CAPACITY: usize = 64;

/// Cloneable handle to the shared event bus.
#[derive(Debug, Clone)]
pub struct EventHub {
    sender: broadcast::Sender<AppEvent>,
}

impl EventHub {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CHANNEL_CAPACITY)
    }

    /// Emit an event to all current subscribers.
    ///
    /// Emitting with nobody listening is not an error.
    pub fn emit(&self, event: AppEvent) {
        debug!(event = %event.event_name(), "Emitting window event");
        let _ = self.sender.send(event);
    }

    /// Raw receiver for every event emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Call `handler` for every event named `name` until the returned
    /// subscription is dropped.
    ///
    /// The receiver is registered before this returns, so no event emitted
    /// afterwards can be missed.
    pub fn listen<F>(&self, name: &'static str, mut handler: F) -> Subscription
    where
        F: FnMut(AppEvent) + Send + 'static,
    {
        let mut receiver = self.sender.subscribe();
        let task = tokio::spawn(async move {
            while let Some(event) = next_named(&mut receiver, name).await {
                handler(event);
            }
        });
        Subscription { task }
    }

    /// Call `handler` for the first event named `name`, then stop.
    pub fn once<F>(&self, name: &'static str, handler: F) -> Subscription
    where
        F: FnOnce(AppEvent) + Send + 'static,
    {
        let mut receiver = self.sender.subscribe();
        let task = tokio::spawn(async move {
            if let Some(event) = next_named(&mut receiver, name).await {
                handler(event);
            }
        });
        Subscription { task }
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl AppEventEmitter for EventHub {
    fn emit(&self, event: AppEvent) {
        Self::emit(self, event);
    }

    fn clone_box(&self) -> Box<dyn AppEventEmitter> {
        Box::new(self.clone())
    }
}

async fn next_named(
    receiver: &mut broadcast::Receiver<AppEvent>,
    name: &'static str,
) -> Option<AppEvent> {
    loop {
        match receiver.recv().await {
            Ok(event) if event.event_name() == name => return Some(event),
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                warn!(event = name, skipped, "Event listener lagged behind");
            }
            Err(RecvError::Closed) => return None,
        }
    }
}

/// Handle to a running listener. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    task: JoinHandle<()>,
}

impl Subscription {
    /// Whether the listener has stopped (a `once` handler fired, or the bus
    /// closed).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
