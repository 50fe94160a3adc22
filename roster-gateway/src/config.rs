//! Startup configuration for the gateway binary.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Port used when neither `--port` nor `ROSTER_PORT` is given.
pub const DEFAULT_PORT: u16 = 8000;

/// Command-line and environment settings.
#[derive(Debug, Clone, Parser)]
#[command(name = "roster-gateway", version, about = "In-memory user record service with CORS")]
pub struct ServerArgs {
    /// Port to listen on.
    #[arg(short, long, env = "ROSTER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Interface address to bind; the default listens on all interfaces.
    #[arg(long, env = "ROSTER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
}

impl ServerArgs {
    /// Address the listener binds to.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
