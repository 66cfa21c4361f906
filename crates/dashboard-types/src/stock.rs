//! Stock quote data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single ticker quote from the fixed stock list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Stock {
    /// Ticker symbol
    #[schema(example = "AAPL")]
    pub symbol: String,
    /// Last traded price
    #[schema(example = 150.25)]
    pub price: f64,
    /// Absolute change since the previous close
    #[schema(example = 1.5)]
    pub change: f64,
}
