//! Core domain for the toolfetch dashboard.
//!
//! This crate holds everything that decides *what* the dashboard shows and
//! *when*: the display cells and their merge rules, the backend command
//! catalogue, the refresh fan-out, and the gateway relay that hands the
//! default gateway to the ping-options window. Transport details (real
//! windows, real backends) are injected through [`ports`].
#![deny(unused_crate_dependencies)]

pub mod commands;
pub mod domain;
pub mod events;
pub mod ports;
pub mod services;
pub mod settings;

pub use commands::{BackendCommand, CpuStats, DiskUsage, GatewayAndMac, Ipv4AndMask, MemInfo};
pub use domain::{CellAddress, Dashboard, HardwareRow, NetworkRow, TableId, TableSnapshot};
pub use events::{AppEvent, EventHub, Subscription};
pub use ports::{
    AppEventEmitter, CommandError, CommandInvoker, DialogPort, GatewayObserver,
    NoopEmitter, WindowError, WindowFactory, WindowSpec,
};
pub use services::{
    CommandGateway, FAILURE_SENTINEL, GatewayRelay, InformationAggregator, PingOptions,
    PingOptionsState, PingWindowSlot, RefreshCycle, ReportedFailure, SystemTool,
};
pub use settings::{
    DEFAULT_PLACEHOLDER, DEFAULT_MAC_SPACING, DashboardSettings, PingWindowSettings,
    SettingsError, StaleCompletionPolicy, validate_settings,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
