//! System tool shortcuts.
//!
//! Every shortcut is a `button_open` backend call with fixed arguments.

use serde_json::json;
use tracing::{info, warn};

use crate::commands::BUTTON_OPEN;
use crate::ports::{CommandInvoker, DialogPort};

/// A system tool reachable from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTool {
    ControlPanel,
    Printers,
    AdminTools,
    Programs,
    CommandPrompt,
}

impl SystemTool {
    /// Program name and arguments.
    pub const fn program(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::ControlPanel => ("control", &[]),
            Self::Printers => ("control", &["printers"]),
            Self::AdminTools => ("control", &["admintools"]),
            Self::Programs => ("control", &["appwiz.cpl"]),
            Self::CommandPrompt => ("cmd.exe", &["/c", "start"]),
        }
    }

    pub async fn launch(self, invoker: &dyn CommandInvoker, dialogs: &dyn DialogPort) -> bool {
        let (name, args) = self.program();
        launch_program(invoker, dialogs, name, args, true).await
    }
}

/// Ask the backend to start a program. Failures are shown as a dialog.
pub(crate) async fn launch_program(
    invoker: &dyn CommandInvoker,
    dialogs: &dyn DialogPort,
    name: &str,
    args: &[&str],
    no_window: bool,
) -> bool {
    let payload = json!({
        "name": name,
        "args": args,
        "noWindow": no_window,
    });

    match invoker.invoke(BUTTON_OPEN, Some(payload)).await {
        Ok(_) => {
            info!(program = name, ?args, "Program started");
            true
        }
        Err(e) => {
            warn!(program = name, error = %e, "Failed to start program");
            dialogs.message(&format!("failed to start {name}: {e}"), "Error");
            false
        }
    }
}
