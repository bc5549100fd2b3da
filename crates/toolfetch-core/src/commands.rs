//! Backend command catalogue and payload shapes.
//!
//! Every query the dashboard issues is one of the [`BackendCommand`]
//! variants. The payload types mirror the JSON the backend produces, so
//! they deserialize straight from the value returned by a
//! [`CommandInvoker`](crate::ports::CommandInvoker).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Command used by the shortcut buttons and the ping window to start a
/// program.
pub const BUTTON_OPEN: &str = "button_open";

/// A named backend query consumed by the information aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendCommand {
    OsVersion,
    Username,
    CpuModel,
    CpuStats,
    Ram,
    Disk,
    GatewayAndMac,
    LocalIpv4AndMask,
    LocalIpv6,
    ExternalIpv4,
    ExternalIpv6,
}

impl BackendCommand {
    /// Every command issued by one refresh cycle, in issue order.
    pub const ALL: [Self; 11] = [
        Self::OsVersion,
        Self::Username,
        Self::CpuModel,
        Self::CpuStats,
        Self::Ram,
        Self::Disk,
        Self::GatewayAndMac,
        Self::LocalIpv4AndMask,
        Self::LocalIpv6,
        Self::ExternalIpv4,
        Self::ExternalIpv6,
    ];

    /// Wire name understood by the backend.
    pub const fn name(self) -> &'static str {
        match self {
            Self::OsVersion => "os_version",
            Self::Username => "username",
            Self::CpuModel => "cpu_model",
            Self::CpuStats => "cpu_stats",
            Self::Ram => "ram",
            Self::Disk => "disk",
            Self::GatewayAndMac => "gateway_and_mac",
            Self::LocalIpv4AndMask => "local_ipv4_and_mask",
            Self::LocalIpv6 => "local_ipv6",
            Self::ExternalIpv4 => "external_ipv4",
            Self::ExternalIpv6 => "external_ipv6",
        }
    }
}

impl fmt::Display for BackendCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `cpu_stats` payload: `[cores, mhz]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuStats(pub u32, pub u64);

impl CpuStats {
    pub const fn cores(&self) -> u32 {
        self.0
    }

    pub const fn mhz(&self) -> u64 {
        self.1
    }
}

/// `ram` payload. Only `total` (kilobytes) is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemInfo {
    pub total: u64,
    #[serde(default)]
    pub free: u64,
    #[serde(default)]
    pub avail: u64,
}

/// `disk` payload: `[total_kb, used_kb]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskUsage(pub u64, pub u64);

impl DiskUsage {
    pub const fn total_kb(&self) -> u64 {
        self.0
    }

    pub const fn used_kb(&self) -> u64 {
        self.1
    }
}

/// `gateway_and_mac` payload: `[address, mac]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayAndMac(pub String, pub String);

/// `local_ipv4_and_mask` payload: `[address, mask]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv4AndMask(pub String, pub String);
