//! Weather data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Weather report for one of the known cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Weather {
    /// City the report applies to
    #[schema(example = "Moscow")]
    pub city: String,
    /// Temperature in degrees Celsius
    #[schema(example = 15.0)]
    pub temperature: f64,
    /// Short human-readable description
    #[schema(example = "Cloudy")]
    pub description: String,
}
