//! Human-readable formatting for hardware payloads.

use crate::commands::{CpuStats, DiskUsage, MemInfo};

/// `"{cores} cores @ {mhz} MHz"`.
pub fn cpu_summary(stats: CpuStats) -> String {
    format!("{} cores @ {} MHz", stats.cores(), stats.mhz())
}

/// Total RAM as integer megabytes plus gigabytes to one decimal.
///
/// The backend reports kilobytes; megabytes use integer division by 1024
/// and gigabytes divide those megabytes by 1000.
#[allow(clippy::cast_precision_loss)]
pub fn ram_summary(mem: MemInfo) -> String {
    let mb = mem.total / 1024;
    let gb = mb as f64 / 1000.0;
    format!("{mb} Mb ({gb:.1} Gb)")
}

/// Disk size and usage, e.g. `"476.3 Gb (used: 120.5 Gb = 25.30%)"`.
#[allow(clippy::cast_precision_loss)]
pub fn disk_summary(disk: DiskUsage) -> String {
    const KB_PER_GB: f64 = 1024.0 * 1024.0;

    let total_gb = disk.total_kb() as f64 / KB_PER_GB;
    let used_gb = disk.used_kb() as f64 / KB_PER_GB;
    let used_pct = if disk.total_kb() == 0 {
        0.0
    } else {
        disk.used_kb() as f64 / disk.total_kb() as f64 * 100.0
    };

    format!("{total_gb:.1} Gb (used: {used_gb:.1} Gb = {used_pct:.2}%)")
}
