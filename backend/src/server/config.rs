//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use crate::fixtures::DelayProfile;

/// Builder-style configuration for creating the HTTP server.
///
/// Constructed explicitly in `main`; the mock API takes no environment
/// variables or CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    delays: DelayProfile,
}

impl ServerConfig {
    /// Construct a configuration for the given address with the default
    /// latency profile.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            delays: DelayProfile::default(),
        }
    }

    /// Replace the latency profile.
    #[must_use]
    pub fn with_delays(mut self, delays: DelayProfile) -> Self {
        self.delays = delays;
        self
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Artificial latency applied per endpoint.
    #[must_use]
    pub fn delays(&self) -> DelayProfile {
        self.delays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn defaults_to_the_documented_latency_profile() {
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.delays(), DelayProfile::default());
        assert_eq!(config.bind_addr().port(), 3000);
    }

    #[test]
    fn with_delays_replaces_the_profile() {
        let profile = DelayProfile {
            users: Duration::from_millis(1),
            ..DelayProfile::none()
        };
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0))).with_delays(profile);
        assert_eq!(config.delays(), profile);
    }
}
