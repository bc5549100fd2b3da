//! Information aggregator - one refresh cycle fanned out over the backend.
//!
//! `refresh` resets every cell to the placeholder synchronously, then
//! spawns one task per backend command. Each task owns exactly the cells
//! its command feeds. Nothing is awaited between spawns and nothing from a
//! previous cycle is cancelled.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::command_gateway::CommandGateway;
use crate::commands::{BackendCommand, GatewayAndMac, Ipv4AndMask};
use crate::domain::format::{cpu_summary, disk_summary, ram_summary};
use crate::domain::{Dashboard, HardwareRow, NetworkRow};
use crate::ports::GatewayObserver;

/// Issues the backend queries of a refresh cycle and wires their results
/// into the dashboard.
#[derive(Clone)]
pub struct InformationAggregator {
    inner: Arc<Inner>,
}

struct Inner {
    gateway: CommandGateway,
    dashboard: Arc<Dashboard>,
    observer: Arc<dyn GatewayObserver>,
}

impl InformationAggregator {
    pub fn new(
        gateway: CommandGateway,
        dashboard: Arc<Dashboard>,
        observer: Arc<dyn GatewayObserver>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                gateway,
                dashboard,
                observer,
            }),
        }
    }

    pub fn dashboard(&self) -> &Arc<Dashboard> {
        &self.inner.dashboard
    }

    /// Start a refresh cycle.
    ///
    /// Must be called from within a tokio runtime. The returned cycle can
    /// be awaited, but dropping it does not cancel anything.
    pub fn refresh(&self) -> RefreshCycle {
        let generation = self.inner.dashboard.begin_cycle();
        info!(generation, "Starting refresh cycle");

        let tasks = BackendCommand::ALL
            .into_iter()
            .map(|command| {
                let inner = Arc::clone(&self.inner);
                let task = tokio::spawn(async move { inner.complete(command, generation).await });
                (command, task)
            })
            .collect();

        RefreshCycle { generation, tasks }
    }
}

impl Inner {
    async fn complete(&self, command: BackendCommand, generation: u64) {
        let board = &self.dashboard;
        let gw = &self.gateway;

        match command {
            BackendCommand::OsVersion => {
                let text = gw.execute_text(command, std::convert::identity::<String>).await;
                board.write(generation, HardwareRow::Os, text);
            }
            BackendCommand::Username => {
                let text = gw.execute_text(command, std::convert::identity::<String>).await;
                board.write(generation, HardwareRow::User, text);
            }
            BackendCommand::CpuModel => {
                let text = gw.execute_text(command, std::convert::identity::<String>).await;
                board.write(generation, HardwareRow::CpuModel, text);
            }
            BackendCommand::CpuStats => {
                let text = gw.execute_text(command, cpu_summary).await;
                board.write(generation, HardwareRow::CpuCores, text);
            }
            BackendCommand::Ram => {
                let text = gw.execute_text(command, ram_summary).await;
                board.write(generation, HardwareRow::Ram, text);
            }
            BackendCommand::Disk => {
                let text = gw.execute_text(command, disk_summary).await;
                board.write(generation, HardwareRow::Disk, text);
            }
            BackendCommand::GatewayAndMac => match gw.execute::<GatewayAndMac>(command).await {
                Ok(GatewayAndMac(address, mac)) => {
                    // A discarded stale completion must not reach the relay.
                    if board.write(generation, NetworkRow::Gateway, address.as_str()) {
                        board.write_gateway_identifier(generation, mac);
                        self.observer.gateway_discovered(&address);
                    }
                }
                // The composite cell keeps whatever address it gets.
                Err(failure) => {
                    board.write(generation, NetworkRow::Gateway, failure.sentinel());
                }
            },
            BackendCommand::LocalIpv4AndMask => match gw.execute::<Ipv4AndMask>(command).await {
                Ok(Ipv4AndMask(address, mask)) => {
                    board.write_local_address(generation, address);
                    board.write(generation, NetworkRow::Subnet, mask);
                }
                Err(failure) => {
                    board.write_local_address(generation, failure.sentinel());
                    board.write(generation, NetworkRow::Subnet, failure.sentinel());
                }
            },
            BackendCommand::LocalIpv6 => {
                let text = gw.execute_text(command, std::convert::identity::<String>).await;
                board.write(generation, NetworkRow::InternalIpv6, text);
            }
            BackendCommand::ExternalIpv4 => {
                let text = gw.execute_text(command, std::convert::identity::<String>).await;
                board.write(generation, NetworkRow::ExternalIpv4, text);
            }
            BackendCommand::ExternalIpv6 => {
                let text = gw.execute_text(command, std::convert::identity::<String>).await;
                board.write(generation, NetworkRow::ExternalIpv6, text);
            }
        }

        debug!(%command, generation, "Cell updated");
    }
}

/// The in-flight tasks of one refresh cycle.
#[derive(Debug)]
pub struct RefreshCycle {
    generation: u64,
    tasks: Vec<(BackendCommand, JoinHandle<()>)>,
}

impl RefreshCycle {
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Wait until the handler for `command` has written its cells.
    ///
    /// Returns `false` if the command was already awaited or its task
    /// panicked.
    pub async fn completed(&mut self, command: BackendCommand) -> bool {
        let Some(pos) = self.tasks.iter().position(|(c, _)| *c == command) else {
            return false;
        };
        let (_, task) = self.tasks.remove(pos);
        match task.await {
            Ok(()) => true,
            Err(e) => {
                error!(%command, generation = self.generation, error = %e, "Completion handler failed");
                false
            }
        }
    }

    /// Wait for every remaining handler of this cycle.
    pub async fn join(self) {
        for (command, task) in self.tasks {
            if let Err(e) = task.await {
                error!(%command, generation = self.generation, error = %e, "Completion handler failed");
            }
        }
    }
}
