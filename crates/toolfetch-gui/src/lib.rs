//! Main-window composition for toolfetch.
//!
//! [`MainWindow`] is the explicit owned context of the dashboard window:
//! it owns the display board, the refresh aggregator, the gateway relay,
//! and the handle of the ping-options window. The remaining modules are
//! in-process adapters for the core ports (a JSON replay backend, dialog
//! sinks, and a window factory running the ping-options controller on the
//! shared event hub).
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

pub mod deps;
pub mod dialogs;
pub mod error;
pub mod fixture;
pub mod main_window;
pub mod windows;

pub use deps::MainWindowDeps;
pub use dialogs::{Dialog, LoggingDialogs, RecordingDialogs};
pub use error::GuiError;
pub use fixture::{FixtureFile, FixtureInvoker};
pub use main_window::MainWindow;
pub use windows::InProcessWindows;
