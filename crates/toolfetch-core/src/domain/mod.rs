//! Display domain: tables, cells, and value formatting.

mod cell;
mod dashboard;
pub mod format;
mod table;

pub use cell::{Cell, CompositeCell};
pub use dashboard::{Dashboard, TableSnapshot};
pub use table::{CellAddress, HardwareRow, NetworkRow, TableId};
