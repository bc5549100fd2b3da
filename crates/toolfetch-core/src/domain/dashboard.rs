//! The dashboard board: every display cell of both tables.
//!
//! Cells are written by completion handlers running on independent tasks.
//! Each write holds the board lock only for the duration of a slot
//! assignment; the composite cell's two slots make the final internal
//! IPv4 text independent of completion order.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cell::{Cell, CompositeCell};
use super::table::{CellAddress, HardwareRow, NetworkRow, TableId};
use crate::settings::{DashboardSettings, StaleCompletionPolicy};

#[derive(Debug, Default)]
struct Board {
    generation: u64,
    hardware: [Cell; HardwareRow::ALL.len()],
    network: [Cell; NetworkRow::ALL.len()],
    internal_ipv4: CompositeCell,
}

impl Board {
    fn cell_mut(&mut self, address: CellAddress) -> &mut Cell {
        match address {
            CellAddress::Hardware(row) => &mut self.hardware[row.index()],
            CellAddress::Network(row) => &mut self.network[row.index()],
        }
    }
}

/// Label/value rows of one table, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub table: TableId,
    pub rows: Vec<(String, String)>,
}

/// Shared display state for both tables.
#[derive(Debug)]
pub struct Dashboard {
    board: Mutex<Board>,
    placeholder: String,
    mac_spacing: String,
    stale_policy: StaleCompletionPolicy,
}

impl Dashboard {
    pub fn new(settings: &DashboardSettings) -> Self {
        Self {
            board: Mutex::new(Board::default()),
            placeholder: settings.placeholder.clone(),
            mac_spacing: settings.mac_spacing.clone(),
            stale_policy: settings.stale_completions,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Board> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reset every cell to the placeholder and start a new generation.
    ///
    /// Must run before any query of the new cycle is issued.
    pub fn begin_cycle(&self) -> u64 {
        let mut board = self.lock();
        board.generation += 1;
        board.hardware = Default::default();
        board.network = Default::default();
        board.internal_ipv4.clear();
        board.generation
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Whether a completion tagged `generation` may write.
    fn accepts(&self, board: &Board, generation: u64, what: &str) -> bool {
        if generation == board.generation {
            return true;
        }
        match self.stale_policy {
            StaleCompletionPolicy::Apply => true,
            StaleCompletionPolicy::Discard => {
                debug!(
                    generation,
                    current = board.generation,
                    cell = what,
                    "Discarding stale completion"
                );
                false
            }
        }
    }

    /// Overwrite a single-value cell.
    ///
    /// Writing the internal IPv4 row through this method replaces its
    /// address slot. Returns `false` when a stale write was discarded.
    pub fn write(
        &self,
        generation: u64,
        address: impl Into<CellAddress>,
        text: impl Into<String>,
    ) -> bool {
        let address = address.into();
        let mut board = self.lock();
        if !self.accepts(&board, generation, address.label()) {
            return false;
        }
        if address == CellAddress::Network(NetworkRow::InternalIpv4) {
            board.internal_ipv4.set_address(text);
        } else {
            *board.cell_mut(address) = Cell::Ready(text.into());
        }
        true
    }

    /// Fill the address slot of the internal IPv4 cell.
    pub fn write_local_address(&self, generation: u64, address: impl Into<String>) -> bool {
        self.write(generation, NetworkRow::InternalIpv4, address)
    }

    /// Fill the identifier (gateway MAC) slot of the internal IPv4 cell.
    pub fn write_gateway_identifier(&self, generation: u64, identifier: impl Into<String>) {
        let mut board = self.lock();
        if !self.accepts(&board, generation, NetworkRow::InternalIpv4.label()) {
            return;
        }
        board.internal_ipv4.set_identifier(identifier);
    }

    /// Rendered text of a cell.
    pub fn text(&self, address: impl Into<CellAddress>) -> String {
        let address = address.into();
        let mut board = self.lock();
        if address == CellAddress::Network(NetworkRow::InternalIpv4) {
            return board
                .internal_ipv4
                .render(&self.placeholder, &self.mac_spacing);
        }
        board.cell_mut(address).render(&self.placeholder)
    }

    /// Whether a cell still shows the placeholder.
    pub fn is_loading(&self, address: impl Into<CellAddress>) -> bool {
        let address = address.into();
        let mut board = self.lock();
        if address == CellAddress::Network(NetworkRow::InternalIpv4) {
            return board.internal_ipv4.is_loading();
        }
        board.cell_mut(address).is_loading()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Label/value pairs of one table in display order.
    pub fn snapshot(&self, table: TableId) -> TableSnapshot {
        let addresses: Vec<CellAddress> = match table {
            TableId::Hardware => HardwareRow::ALL.into_iter().map(Into::into).collect(),
            TableId::Network => NetworkRow::ALL.into_iter().map(Into::into).collect(),
        };
        let rows = addresses
            .into_iter()
            .map(|address| (address.label().to_string(), self.text(address)))
            .collect();
        TableSnapshot { table, rows }
    }
}
