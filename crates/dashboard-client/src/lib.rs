//! Client-side data layer for the mock dashboard API.
//!
//! Purpose: pair a generic fetch lifecycle wrapper ([`DataFetcher`]) with a
//! session-scoped user store ([`SessionStore`]) so views can consume the
//! fixture service without owning transport concerns.
//!
//! Public surface:
//! - [`DataFetcher`] — one URL, one decode target, `{data, loading, error}`.
//! - [`FetchState`] / [`FetchError`] — observable lifecycle state and the
//!   failure taxonomy.
//! - [`SessionStore`] — the session's current user identity and resolved
//!   city.

pub mod fetcher;
pub mod session;

pub use fetcher::{DataFetcher, FetchError, FetchState};
pub use session::SessionStore;
