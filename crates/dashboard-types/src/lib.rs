//! Shared wire types for the mock dashboard API.
//!
//! Purpose: Define the strongly typed schemas exchanged between the fixture
//! service and the client data layer. Keep types immutable and document the
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - [`User`] — demo user profile.
//! - [`Weather`] — weather report for a known city.
//! - [`Stock`] — a single ticker quote.
//! - [`WidgetConfig`] / [`Widget`] — dashboard layout entries with
//!   per-component settings enforced by the type system.

pub mod stock;
pub mod user;
pub mod weather;
pub mod widget;

pub use self::stock::Stock;
pub use self::user::User;
pub use self::weather::Weather;
pub use self::widget::{
    StockTickerSettings, UserProfileSettings, WeatherSettings, Widget, WidgetConfig,
};
