//! Server configuration.
//!
//! Every value has a default, so a bare `corehttp` invocation listens on
//! `:8080` and accepts `Bearer my-secret-token`. Both can be overridden by flag
//! or environment variable.

use std::fmt;
use std::net::SocketAddr;

use clap::Parser;

pub const DEFAULT_ADDR: &str = ":8080";
pub const DEFAULT_TOKEN: &str = "my-secret-token";

/// Runtime configuration, injected into [`Server::new`](crate::Server::new).
#[derive(Clone, Parser)]
#[command(name = "corehttp", version, about = "Minimal HTTP API server with bearer auth")]
pub struct Config {
    /// Listen address. `:PORT` binds every interface.
    #[arg(long, env = "COREHTTP_ADDR", default_value = DEFAULT_ADDR, value_parser = parse_addr)]
    pub addr: SocketAddr,

    /// Shared secret expected in `Authorization: Bearer <token>`.
    #[arg(long, env = "COREHTTP_TOKEN", default_value = DEFAULT_TOKEN, hide_env_values = true, hide_default_value = true)]
    pub token: String,
}

impl Config {
    pub fn new(addr: SocketAddr, token: impl Into<String>) -> Self {
        Self { addr, token: token.into() }
    }
}

impl Default for Config {
    fn default() -> Self {
        let addr = parse_addr(DEFAULT_ADDR).expect("DEFAULT_ADDR is a valid listen address");
        Self::new(addr, DEFAULT_TOKEN)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Parses `host:port`, or a bare `:port` meaning all interfaces.
pub fn parse_addr(s: &str) -> Result<SocketAddr, String> {
    let parsed = match s.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{port}").parse::<SocketAddr>(),
        None => s.parse::<SocketAddr>(),
    };
    parsed.map_err(|e| format!("invalid listen address `{s}`: {e}"))
}
