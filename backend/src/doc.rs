//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates the mock API's endpoints and schemas. The generated
//! document is exported via `cargo run --bin openapi-dump` for external
//! tooling.

use dashboard_types::{
    Stock, StockTickerSettings, User, UserProfileSettings, Weather, WeatherSettings, Widget,
    WidgetConfig,
};
use utoipa::OpenApi;

use crate::api::error::ErrorBody;

/// OpenAPI document for the mock dashboard API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mock dashboard API",
        description = "Static fixtures behind artificial latency: user profile, weather, stocks, and dashboard layout."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::users::get_user,
        crate::api::weather::get_weather,
        crate::api::stocks::get_stocks,
        crate::api::dashboard::get_dashboard,
    ),
    components(schemas(
        User,
        Weather,
        Stock,
        WidgetConfig,
        Widget,
        UserProfileSettings,
        WeatherSettings,
        StockTickerSettings,
        ErrorBody,
    )),
    tags(
        (name = "users", description = "Demo user profile"),
        (name = "weather", description = "Weather fixtures"),
        (name = "stocks", description = "Stock quote fixtures"),
        (name = "dashboard", description = "Dashboard layout")
    )
)]
pub struct ApiDoc;
