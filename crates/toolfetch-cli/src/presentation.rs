//! Plain-text rendering of dashboard tables.

use std::fmt::Write;

use toolfetch_core::{TableId, TableSnapshot};
use toolfetch_gui::Dialog;

const fn heading(table: TableId) -> &'static str {
    match table {
        TableId::Hardware => "Hardware",
        TableId::Network => "Network",
    }
}

/// Render a table with its labels aligned.
pub fn format_table(snapshot: &TableSnapshot) -> String {
    let width = snapshot
        .rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n", heading(snapshot.table));
    for (label, value) in &snapshot.rows {
        let _ = writeln!(out, "  {label:<width$}  {value}");
    }
    out
}

pub fn format_dialogs(dialogs: &[Dialog]) -> String {
    let mut out = String::new();
    for dialog in dialogs {
        let _ = writeln!(out, "[{}] {}", dialog.title, dialog.text);
    }
    out
}
