//! Window creation port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::WindowError;
use crate::settings::PingWindowSettings;

/// Everything the windowing layer needs to create a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSpec {
    pub label: String,
    pub title: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub center: bool,
    pub focus: bool,
    pub visible: bool,
    pub resizable: bool,
    pub always_on_top: bool,
    pub file_drop_enabled: bool,
}

impl From<&PingWindowSettings> for WindowSpec {
    fn from(settings: &PingWindowSettings) -> Self {
        Self {
            label: settings.label.clone(),
            title: settings.title.clone(),
            url: settings.url.clone(),
            width: settings.width,
            height: settings.height,
            center: settings.center,
            focus: settings.focus,
            visible: true,
            resizable: settings.resizable,
            always_on_top: settings.always_on_top,
            file_drop_enabled: false,
        }
    }
}

/// Creates secondary windows.
///
/// Creation is asynchronous; an `Err` is the windowing layer's late error
/// report for that window.
#[async_trait]
pub trait WindowFactory: Send + Sync {
    async fn create_window(&self, spec: &WindowSpec) -> Result<(), WindowError>;
}
