//! Dashboard widget configuration.
//!
//! The dashboard endpoint returns an ordered list of [`WidgetConfig`]
//! entries. Each entry names the component to render and carries settings
//! whose shape is fully determined by that component: the pairing is encoded
//! as the [`Widget`] tagged union, so a payload with a mismatched
//! `component`/`settings` combination fails to deserialise instead of
//! surfacing downstream.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A dashboard layout entry.
///
/// Serialises as `{"id": 1, "component": "UserProfile", "settings": {...}}`;
/// the component tag and settings live in the flattened [`Widget`] union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WidgetConfig {
    /// Position-stable widget identifier
    #[schema(example = 1)]
    pub id: u32,
    /// Component tag plus its settings
    #[serde(flatten)]
    pub widget: Widget,
}

/// Component tag and settings for one widget, matched exhaustively by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "component", content = "settings")]
pub enum Widget {
    /// Profile card for a single user
    UserProfile(UserProfileSettings),
    /// Weather card for a default city
    Weather(WeatherSettings),
    /// Scrolling ticker over a list of symbols
    StockTicker(StockTickerSettings),
}

/// Settings for the user profile widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserProfileSettings {
    /// Identifier of the user to display
    #[schema(example = 123)]
    pub user_id: u32,
}

/// Settings for the weather widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WeatherSettings {
    /// City shown before the user picks one
    #[schema(example = "Moscow")]
    pub default_city: String,
}

/// Settings for the stock ticker widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StockTickerSettings {
    /// Ticker symbols in display order
    pub symbols: Vec<String>,
}
