use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Cadence motivational speech server
#[derive(Debug, Parser)]
#[command(name = "cadence", about = "Turns prompts into motivational text and spoken audio")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "cadence.toml", env = "CADENCE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "CADENCE_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Listen on all interfaces at this port; `--listen` takes precedence
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Log filter directive, e.g. `info` or `cadence_server=debug`
    #[arg(long, default_value = "info", env = "CADENCE_LOG")]
    pub log: String,
}

impl Args {
    /// The listen address requested on the command line, if any
    pub fn listen_override(&self) -> Option<SocketAddr> {
        self.listen
            .or_else(|| self.port.map(|port| SocketAddr::from(([0, 0, 0, 0], port))))
    }
}
