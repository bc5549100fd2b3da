//! Services orchestrating the dashboard: backend calls, refresh fan-out,
//! and the cross-window gateway handshake.

mod aggregator;
mod command_gateway;
mod ping_window;
mod relay;
mod tools;

pub use aggregator::{InformationAggregator, RefreshCycle};
pub use command_gateway::{CommandGateway, FAILURE_SENTINEL, ReportedFailure};
pub use ping_window::{PingOptions, PingOptionsState};
pub use relay::{GatewayRelay, PingWindowSlot};
pub use tools::SystemTool;
