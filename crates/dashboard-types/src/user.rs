//! User data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Demo user profile served by the mock API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Stable user identifier
    #[schema(example = 123)]
    pub id: u32,
    /// Display name shown in the profile widget
    #[schema(example = "John Doe")]
    pub name: String,
    /// Home city, used to seed the session's resolved city
    #[schema(example = "London")]
    pub city: String,
}
