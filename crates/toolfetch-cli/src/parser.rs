//! Command-line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "toolfetch")]
#[command(about = "Show hardware and network information of this machine")]
#[command(version)]
pub struct Cli {
    /// Dashboard settings file (JSON)
    #[arg(long, env = "TOOLFETCH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Backend replay fixture (JSON); a built-in sample machine if omitted
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run one refresh cycle and print both tables
    Refresh {
        /// Print the tables as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the ping-options window and report its gateway choice
    Ping {
        /// Open the window before the refresh starts
        #[arg(long)]
        open_first: bool,

        /// How long to wait for the gateway
        #[arg(long, default_value_t = 1000)]
        wait_ms: u64,

        /// Ping the gateway once it is available
        #[arg(long)]
        ping_gateway: bool,
    },
}
