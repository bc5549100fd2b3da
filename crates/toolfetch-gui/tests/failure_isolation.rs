//! Integration tests for per-command failure handling.

mod common;

use common::{GatedInvoker, app};
use toolfetch_core::{BackendCommand, HardwareRow, NetworkRow};

#[tokio::test]
async fn test_one_failure_leaves_other_cells_intact() {
    let invoker = GatedInvoker::healthy();
    invoker.fail(BackendCommand::Ram, "access denied");
    let app = app(invoker);
    app.window.load().join().await;

    let board = app.window.dashboard();
    assert_eq!(board.text(HardwareRow::Ram), "Error");
    assert_eq!(board.text(HardwareRow::Os), "Windows 10 Home");
    assert_eq!(board.text(HardwareRow::User), "DESKTOP \\ alice");
    assert_eq!(board.text(HardwareRow::CpuCores), "12 cores @ 3593 MHz");
    assert_eq!(
        board.text(HardwareRow::Disk),
        "500.0 Gb (used: 250.0 Gb = 50.00%)"
    );
    assert_eq!(board.text(NetworkRow::ExternalIpv6), "2001:db8::7");

    for row in HardwareRow::ALL {
        assert!(!board.is_loading(row), "{row:?} still loading");
    }
    for row in NetworkRow::ALL {
        assert!(!board.is_loading(row), "{row:?} still loading");
    }
}

#[tokio::test]
async fn test_failure_shows_exactly_one_dialog() {
    let invoker = GatedInvoker::healthy();
    invoker.fail(BackendCommand::Ram, "access denied");
    let app = app(invoker);
    app.window.load().join().await;

    let shown = app.dialogs.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "Error on ram");
    assert_eq!(shown[0].text, "Failed to get ram: access denied");
}

#[tokio::test]
async fn test_malformed_payload_counts_as_failure() {
    let invoker = GatedInvoker::healthy();
    invoker.respond(BackendCommand::CpuStats, serde_json::json!("eight"));
    let app = app(invoker);
    app.window.load().join().await;

    assert_eq!(app.window.dashboard().text(HardwareRow::CpuCores), "Error");
    assert_eq!(app.dialogs.with_title("Error on cpu_stats").len(), 1);
}

#[tokio::test]
async fn test_every_command_failing_still_settles() {
    let invoker = GatedInvoker::default();
    let app = app(invoker);
    app.window.load().join().await;

    let board = app.window.dashboard();
    assert_eq!(board.text(HardwareRow::Os), "Error");
    assert_eq!(board.text(NetworkRow::Gateway), "Error");
    assert_eq!(app.dialogs.shown().len(), BackendCommand::ALL.len());
    assert_eq!(app.window.relay().cached(), None);
}
