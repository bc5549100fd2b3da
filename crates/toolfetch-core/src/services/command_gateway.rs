//! Command gateway - one-shot backend calls with locally absorbed failures.
//!
//! A failed command shows a dialog naming the command and then yields a
//! [`ReportedFailure`], which renders as the sentinel `"Error"`. Callers
//! that do nothing special with the failure still have text to show, and
//! sibling queries are unaffected. There is no retry.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::commands::BackendCommand;
use crate::ports::{CommandError, CommandInvoker, DialogPort};

/// Text rendered in place of a value whose command failed.
pub const FAILURE_SENTINEL: &str = "Error";

/// A command failure that has already been shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error")]
pub struct ReportedFailure {
    command: String,
    cause: CommandError,
}

impl ReportedFailure {
    pub fn command(&self) -> &str {
        &self.command
    }

    pub const fn cause(&self) -> &CommandError {
        &self.cause
    }

    pub const fn sentinel(&self) -> &'static str {
        FAILURE_SENTINEL
    }
}

/// Gateway to the backend for all dashboard queries.
#[derive(Clone)]
pub struct CommandGateway {
    invoker: Arc<dyn CommandInvoker>,
    dialogs: Arc<dyn DialogPort>,
}

impl CommandGateway {
    pub fn new(invoker: Arc<dyn CommandInvoker>, dialogs: Arc<dyn DialogPort>) -> Self {
        Self { invoker, dialogs }
    }

    /// Run a catalogue command and decode its payload.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        command: BackendCommand,
    ) -> Result<T, ReportedFailure> {
        self.execute_named(command.name(), None).await
    }

    /// Run any named command. A payload of the wrong shape counts as a
    /// command failure.
    pub async fn execute_named<T: DeserializeOwned>(
        &self,
        command: &str,
        args: Option<Value>,
    ) -> Result<T, ReportedFailure> {
        let outcome = match self.invoker.invoke(command, args).await {
            Ok(value) => serde_json::from_value(value).map_err(CommandError::from),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(payload) => {
                debug!(command, "Command completed");
                Ok(payload)
            }
            Err(cause) => Err(self.report(command, cause)),
        }
    }

    /// Run a command and map its payload to display text, or to the
    /// sentinel on failure.
    pub async fn execute_text<T, F>(&self, command: BackendCommand, render: F) -> String
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> String,
    {
        match self.execute(command).await {
            Ok(payload) => render(payload),
            Err(failure) => failure.sentinel().to_string(),
        }
    }

    fn report(&self, command: &str, cause: CommandError) -> ReportedFailure {
        warn!(command, error = %cause, "Backend command failed");
        self.dialogs.message(
            &format!("Failed to get {command}: {cause}"),
            &format!("Error on {command}"),
        );
        ReportedFailure {
            command: command.to_string(),
            cause,
        }
    }

    pub const fn invoker(&self) -> &Arc<dyn CommandInvoker> {
        &self.invoker
    }

    pub const fn dialogs(&self) -> &Arc<dyn DialogPort> {
        &self.dialogs
    }
}
