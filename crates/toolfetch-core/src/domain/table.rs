//! Table and row addressing.
//!
//! The dashboard has two tables. Row numbers start at 1 because row 0 is
//! the table header; the value column is always column 1.

use serde::{Deserialize, Serialize};

/// One of the two dashboard tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableId {
    Hardware,
    Network,
}

/// Rows of the hardware table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareRow {
    Os = 1,
    User,
    CpuModel,
    CpuCores,
    Ram,
    Disk,
}

impl HardwareRow {
    pub const ALL: [Self; 6] = [
        Self::Os,
        Self::User,
        Self::CpuModel,
        Self::CpuCores,
        Self::Ram,
        Self::Disk,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Os => "Operating system",
            Self::User => "Computer \\ user",
            Self::CpuModel => "CPU model",
            Self::CpuCores => "CPU cores",
            Self::Ram => "RAM",
            Self::Disk => "Disk",
        }
    }

    /// Zero-based index into the table body.
    pub(crate) const fn index(self) -> usize {
        self as usize - 1
    }
}

/// Rows of the network table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkRow {
    /// Composite cell: local address plus the gateway MAC.
    InternalIpv4 = 1,
    Subnet,
    Gateway,
    InternalIpv6,
    ExternalIpv4,
    ExternalIpv6,
}

impl NetworkRow {
    pub const ALL: [Self; 6] = [
        Self::InternalIpv4,
        Self::Subnet,
        Self::Gateway,
        Self::InternalIpv6,
        Self::ExternalIpv4,
        Self::ExternalIpv6,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::InternalIpv4 => "Internal IPv4",
            Self::Subnet => "Subnet mask",
            Self::Gateway => "Default gateway",
            Self::InternalIpv6 => "Internal IPv6",
            Self::ExternalIpv4 => "External IPv4",
            Self::ExternalIpv6 => "External IPv6",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize - 1
    }
}

/// Address of a display cell's value column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "table", content = "row", rename_all = "snake_case")]
pub enum CellAddress {
    Hardware(HardwareRow),
    Network(NetworkRow),
}

impl CellAddress {
    pub const fn table(self) -> TableId {
        match self {
            Self::Hardware(_) => TableId::Hardware,
            Self::Network(_) => TableId::Network,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hardware(row) => row.label(),
            Self::Network(row) => row.label(),
        }
    }
}

impl From<HardwareRow> for CellAddress {
    fn from(row: HardwareRow) -> Self {
        Self::Hardware(row)
    }
}

impl From<NetworkRow> for CellAddress {
    fn from(row: NetworkRow) -> Self {
        Self::Network(row)
    }
}
