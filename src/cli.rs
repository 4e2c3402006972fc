use std::path::PathBuf;

use clap::Parser;
use pktlog::{config::LogTarget, LoggerConfig};

#[derive(Debug, Parser)]
#[clap(version, about = "Replays a packet capture file through the packet logger")]
pub struct Args {
    /// Path to a toml capture file
    pub capture: PathBuf,

    /// Path to a toml config file
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Log file, truncated on start (defaults to appending to packets.log)
    #[clap(short, long)]
    pub log: Option<PathBuf>,

    /// Include non-public fields
    #[clap(short, long)]
    pub private: bool,

    /// Don't echo dumps to stdout
    #[clap(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Applies command line overrides on top of `config`.
    pub fn apply(&self, mut config: LoggerConfig) -> LoggerConfig {
        if let Some(log) = &self.log {
            config = config.with_target(LogTarget::File(log.clone()));
        }
        if self.private {
            config = config.with_private_fields(true);
        }
        if self.quiet {
            config = config.with_console(false);
        }
        config
    }
}
