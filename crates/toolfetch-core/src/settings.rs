//! Dashboard settings and validation.
//!
//! Pure configuration types. Loading from disk is a thin `serde_json`
//! wrapper; anything smarter belongs to the adapter.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Text shown in every cell before its query completes.
pub const DEFAULT_PLACEHOLDER: &str = "loading...";

/// Separator between the local address and the gateway MAC.
pub const DEFAULT_MAC_SPACING: &str = "      ";

/// Key that re-runs the refresh cycle.
pub const DEFAULT_REFRESH_KEY: &str = "F5";

/// Target offered by the "internet" choice of the ping window.
pub const DEFAULT_INTERNET_TARGET: &str = "8.8.8.8";

/// What to do with a completion from a superseded refresh cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleCompletionPolicy {
    /// Write it anyway. Backend queries are idempotent reads.
    #[default]
    Apply,
    /// Drop it and log at debug level.
    Discard,
}

/// Options for the ping-options window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PingWindowSettings {
    pub label: String,
    pub title: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub center: bool,
    pub focus: bool,
    pub resizable: bool,
    pub always_on_top: bool,
}

impl Default for PingWindowSettings {
    fn default() -> Self {
        Self {
            label: "Ping-options".to_string(),
            title: "Ping Options".to_string(),
            url: "/pingoptions.html".to_string(),
            width: 400,
            height: 130,
            center: true,
            focus: true,
            resizable: false,
            always_on_top: true,
        }
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub placeholder: String,
    pub mac_spacing: String,
    pub refresh_key: String,
    pub stale_completions: StaleCompletionPolicy,
    pub internet_target: String,
    pub ping_window: PingWindowSettings,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DashboardSettings {
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            mac_spacing: DEFAULT_MAC_SPACING.to_string(),
            refresh_key: DEFAULT_REFRESH_KEY.to_string(),
            stale_completions: StaleCompletionPolicy::Apply,
            internet_target: DEFAULT_INTERNET_TARGET.to_string(),
            ping_window: PingWindowSettings::default(),
        }
    }

    /// Load settings from a JSON file and validate them.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let settings: Self =
            serde_json::from_str(&raw).map_err(|e| SettingsError::Parse(e.to_string()))?;
        validate_settings(&settings)?;
        Ok(settings)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Placeholder text cannot be empty")]
    EmptyPlaceholder,

    #[error("MAC separator must be non-empty whitespace, got {0:?}")]
    InvalidMacSpacing(String),

    #[error("Refresh key cannot be empty")]
    EmptyRefreshKey,

    #[error("Ping window size must be non-zero, got {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },

    #[error("Failed to read settings from {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Invalid settings file: {0}")]
    Parse(String),
}

/// Validate settings.
pub fn validate_settings(settings: &DashboardSettings) -> Result<(), SettingsError> {
    if settings.placeholder.is_empty() {
        return Err(SettingsError::EmptyPlaceholder);
    }

    // The separator must never occur inside an address.
    if settings.mac_spacing.is_empty() || !settings.mac_spacing.chars().all(char::is_whitespace) {
        return Err(SettingsError::InvalidMacSpacing(
            settings.mac_spacing.clone(),
        ));
    }

    if settings.refresh_key.trim().is_empty() {
        return Err(SettingsError::EmptyRefreshKey);
    }

    let window = &settings.ping_window;
    if window.width == 0 || window.height == 0 {
        return Err(SettingsError::InvalidWindowSize {
            width: window.width,
            height: window.height,
        });
    }

    Ok(())
}
