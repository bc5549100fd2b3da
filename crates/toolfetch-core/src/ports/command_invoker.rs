//! Backend command port.
//!
//! The backend is an opaque asynchronous oracle: a named command either
//! resolves to a JSON value or fails. There is no cancellation.

use async_trait::async_trait;
use serde_json::Value;

use super::CommandError;

/// Invokes named backend commands.
///
/// # Example
///
/// ```ignore
/// let value = invoker.invoke("os_version", None).await?;
/// let text: String = serde_json::from_value(value)?;
/// ```
#[async_trait]
pub trait CommandInvoker: Send + Sync {
    /// Run `command` with optional JSON arguments.
    async fn invoke(&self, command: &str, args: Option<Value>) -> Result<Value, CommandError>;
}
