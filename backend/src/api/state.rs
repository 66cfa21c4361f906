//! Shared application state injected into HTTP handlers.
//!
//! The state is constructed explicitly by the server assembly (or a test
//! harness) and handed to handlers through `web::Data`; there is no
//! module-level singleton.

use crate::fixtures::{DelayProfile, FixtureSet};

/// Immutable state shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    fixtures: FixtureSet,
    delays: DelayProfile,
}

impl AppState {
    /// Pair a fixture table with a latency profile.
    #[must_use]
    pub fn new(fixtures: FixtureSet, delays: DelayProfile) -> Self {
        Self { fixtures, delays }
    }

    /// Fixture table served by the endpoints.
    #[must_use]
    pub fn fixtures(&self) -> &FixtureSet {
        &self.fixtures
    }

    /// Artificial latency applied per endpoint.
    #[must_use]
    pub fn delays(&self) -> DelayProfile {
        self.delays
    }
}
