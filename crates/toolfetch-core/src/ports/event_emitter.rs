//! Event emitter trait for cross-window event broadcasting.
//!
//! Implementations handle transport details (the in-process hub, a
//! webview event system, test recorders).

use crate::events::AppEvent;

/// Trait for emitting window events.
///
/// # Implementations
///
/// - [`NoopEmitter`] - For tests and contexts without a second window
/// - [`EventHub`](crate::events::EventHub) - The in-process bus
pub trait AppEventEmitter: Send + Sync {
    /// Emit an event. Must not block.
    fn emit(&self, event: AppEvent);

    /// Clone this emitter into a boxed trait object.
    ///
    /// This enables cloning of `Arc<dyn AppEventEmitter>` without requiring
    /// the underlying type to implement Clone.
    fn clone_box(&self) -> Box<dyn AppEventEmitter>;
}

/// A no-op event emitter that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    pub const fn new() -> Self {
        Self
    }
}

impl AppEventEmitter for NoopEmitter {
    fn emit(&self, _event: AppEvent) {}

    fn clone_box(&self) -> Box<dyn AppEventEmitter> {
        Box::new(self.clone())
    }
}
