//! REST API modules.

pub mod dashboard;
pub mod error;
pub mod state;
pub mod stocks;
pub mod users;
pub mod weather;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use state::AppState;
