//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from the
//! windowing shell and the backend. They contain no implementation details
//! and use only domain types.

pub mod command_invoker;
pub mod dialog;
pub mod event_emitter;
pub mod gateway_observer;
pub mod window;

use thiserror::Error;

pub use command_invoker::CommandInvoker;
pub use dialog::DialogPort;
pub use event_emitter::{AppEventEmitter, NoopEmitter};
pub use gateway_observer::GatewayObserver;
pub use window::{WindowFactory, WindowSpec};

/// Failure of one backend command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The backend ran the command and it failed.
    #[error("{0}")]
    Rejected(String),

    /// The backend does not know the command.
    #[error("unknown command: {0}")]
    Unknown(String),

    /// The payload did not have the expected shape.
    #[error("unexpected payload: {0}")]
    Payload(String),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(err.to_string())
    }
}

/// Window creation failure reported by the windowing layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("a window labelled {0} already exists")]
    LabelInUse(String),

    #[error("{0}")]
    Creation(String),
}
