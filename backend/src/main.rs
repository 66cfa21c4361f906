//! Mock API entry-point: serves the fixture endpoints behind artificial latency.

use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::server::{self, ServerConfig};

/// Fixed local port the mock API listens on.
const PORT: u16 = 3000;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], PORT)));
    info!(addr = %config.bind_addr(), "mock API server listening");
    server::run(config).await
}
