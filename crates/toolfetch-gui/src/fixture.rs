//! Replay backend.
//!
//! Answers backend commands from a JSON fixture instead of probing the
//! machine. Per-command failures and delays make it possible to reproduce
//! any completion order.
//!
//! ```json
//! {
//!   "responses": { "os_version": "Windows 11 Pro", "cpu_stats": [8, 3600] },
//!   "failures": { "ram": "access denied" },
//!   "delays_ms": { "external_ipv4": 250 }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use toolfetch_core::commands::BUTTON_OPEN;
use toolfetch_core::{CommandError, CommandInvoker};
use tracing::{debug, info};

use crate::error::GuiError;

/// On-disk fixture format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureFile {
    pub responses: HashMap<String, Value>,
    pub failures: HashMap<String, String>,
    pub delays_ms: HashMap<String, u64>,
}

/// `CommandInvoker` backed by a [`FixtureFile`].
#[derive(Debug, Clone)]
pub struct FixtureInvoker {
    fixture: FixtureFile,
}

impl FixtureInvoker {
    pub const fn new(fixture: FixtureFile) -> Self {
        Self { fixture }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GuiError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GuiError::Fixture(format!("{}: {e}", path.display())))?;
        let fixture = serde_json::from_str(&raw)
            .map_err(|e| GuiError::Fixture(format!("{}: {e}", path.display())))?;
        Ok(Self::new(fixture))
    }

    /// A plausible machine with every command answering.
    pub fn sample() -> Self {
        let responses = [
            ("os_version", json!("Windows 10 Pro 22H2")),
            ("username", json!("WORKSTATION-07 \\ operator")),
            ("cpu_model", json!("Intel(R) Core(TM) i7-10700 CPU @ 2.90GHz")),
            ("cpu_stats", json!([8, 2904])),
            ("ram", json!({ "total": 16_658_432u64, "free": 8_200_000u64, "avail": 9_100_000u64 })),
            ("disk", json!([499_337_216u64, 201_326_592u64])),
            ("gateway_and_mac", json!(["192.168.178.1", "3C:A6:2F:11:22:33"])),
            ("local_ipv4_and_mask", json!(["192.168.178.42", "255.255.255.0"])),
            ("local_ipv6", json!("fe80::1c2b:3d4e:5f60:7182")),
            ("external_ipv4", json!("203.0.113.24")),
            ("external_ipv6", json!("2001:db8:85a3::8a2e:370:7334")),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

        Self::new(FixtureFile {
            responses,
            ..FixtureFile::default()
        })
    }

    /// Make `command` fail with `reason`.
    #[must_use]
    pub fn failing(mut self, command: &str, reason: &str) -> Self {
        self.fixture
            .failures
            .insert(command.to_string(), reason.to_string());
        self
    }

    /// Delay the answer to `command`.
    #[must_use]
    pub fn delayed(mut self, command: &str, delay: Duration) -> Self {
        let millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.fixture.delays_ms.insert(command.to_string(), millis);
        self
    }

    pub const fn fixture(&self) -> &FixtureFile {
        &self.fixture
    }
}

#[async_trait]
impl CommandInvoker for FixtureInvoker {
    async fn invoke(&self, command: &str, args: Option<Value>) -> Result<Value, CommandError> {
        if let Some(&millis) = self.fixture.delays_ms.get(command) {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }

        if let Some(reason) = self.fixture.failures.get(command) {
            debug!(command, reason = %reason, "Fixture failure");
            return Err(CommandError::Rejected(reason.clone()));
        }

        if let Some(value) = self.fixture.responses.get(command) {
            return Ok(value.clone());
        }

        // Program launches have no payload; record them instead.
        if command == BUTTON_OPEN {
            info!(args = ?args, "Would start program");
            return Ok(Value::Null);
        }

        Err(CommandError::Unknown(command.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use toolfetch_core::BackendCommand;

    #[tokio::test]
    async fn sample_answers_every_catalogue_command() {
        let invoker = FixtureInvoker::sample();
        for command in BackendCommand::ALL {
            assert!(
                invoker.invoke(command.name(), None).await.is_ok(),
                "{command} should answer"
            );
        }
    }

    #[tokio::test]
    async fn failures_override_responses() {
        let invoker = FixtureInvoker::sample().failing("ram", "access denied");
        assert_eq!(
            invoker.invoke("ram", None).await,
            Err(CommandError::Rejected("access denied".into()))
        );
    }

    #[tokio::test]
    async fn unknown_commands_are_reported() {
        let invoker = FixtureInvoker::new(FixtureFile::default());
        assert_eq!(
            invoker.invoke("os_version", None).await,
            Err(CommandError::Unknown("os_version".into()))
        );
        assert_eq!(invoker.invoke(BUTTON_OPEN, None).await, Ok(Value::Null));
    }

    #[test]
    fn load_reads_partial_fixture() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "responses": {{ "username": "HOST \\ bob" }}, "delays_ms": {{ "username": 5 }} }}"#
        )
        .unwrap();

        let invoker = FixtureInvoker::load(file.path()).unwrap();
        assert_eq!(invoker.fixture().responses["username"], json!("HOST \\ bob"));
        assert_eq!(invoker.fixture().delays_ms["username"], 5);
        assert!(invoker.fixture().failures.is_empty());
    }

    #[test]
    fn load_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            FixtureInvoker::load(file.path()),
            Err(GuiError::Fixture(_))
        ));
    }
}
