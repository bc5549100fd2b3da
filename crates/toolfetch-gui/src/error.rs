//! Adapter-level error type.

use thiserror::Error;

/// Errors surfaced by the GUI adapters.
#[derive(Debug, Error)]
pub enum GuiError {
    /// The backend fixture could not be read or parsed.
    #[error("Fixture error: {0}")]
    Fixture(String),
}
