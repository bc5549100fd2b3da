//! Dialog sinks.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use toolfetch_core::DialogPort;
use tracing::warn;

/// Shows dialogs as warnings in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingDialogs;

impl DialogPort for LoggingDialogs {
    fn message(&self, text: &str, title: &str) {
        warn!(title, "{text}");
    }
}

/// One dialog that was shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dialog {
    pub title: String,
    pub text: String,
}

/// Keeps every dialog in order, and logs it like [`LoggingDialogs`].
#[derive(Debug, Default)]
pub struct RecordingDialogs {
    shown: Mutex<Vec<Dialog>>,
}

impl RecordingDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<Dialog> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Dialogs whose title is `title`.
    pub fn with_title(&self, title: &str) -> Vec<Dialog> {
        self.shown()
            .into_iter()
            .filter(|d| d.title == title)
            .collect()
    }
}

impl DialogPort for RecordingDialogs {
    fn message(&self, text: &str, title: &str) {
        LoggingDialogs.message(text, title);
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Dialog {
                title: title.to_string(),
                text: text.to_string(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_keeps_order() {
        let dialogs = RecordingDialogs::new();
        dialogs.message("first", "Error on ram");
        dialogs.message("second", "Window error");

        let shown = dialogs.shown();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].text, "first");
        assert_eq!(dialogs.with_title("Window error")[0].text, "second");
    }
}
