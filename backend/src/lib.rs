//! Mock dashboard API library modules.

pub mod api;
pub mod doc;
pub mod fixtures;
pub mod server;

/// Public OpenAPI surface used by the dump binary and tooling.
pub use doc::ApiDoc;
