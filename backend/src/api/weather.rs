//! Weather API handlers.

use actix_web::{get, web};
use dashboard_types::Weather;
use serde::Deserialize;
use tokio::time::sleep;

use crate::api::error::{ApiError, ApiResult, ErrorBody};
use crate::api::state::AppState;

/// Query parameters for the weather endpoint.
///
/// `city` is optional: the original service treats a missing parameter like
/// any unknown city, so its absence must reach the not-found branch rather
/// than fail extraction.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    city: Option<String>,
}

/// Return the weather fixture for a known city.
///
/// Matching is exact and case-sensitive; any other city answers 404 with the
/// localised error envelope.
#[utoipa::path(
    get,
    path = "/api/weather",
    params(
        ("city" = Option<String>, Query, description = "City name, matched exactly and case-sensitively")
    ),
    responses(
        (status = 200, description = "Weather for the requested city", body = Weather),
        (status = 404, description = "City absent from the fixture table", body = ErrorBody)
    ),
    tags = ["weather"],
    operation_id = "getWeather"
)]
#[get("/api/weather")]
pub async fn get_weather(
    state: web::Data<AppState>,
    query: web::Query<WeatherQuery>,
) -> ApiResult<web::Json<Weather>> {
    sleep(state.delays().weather).await;
    query
        .city
        .as_deref()
        .and_then(|city| state.fixtures().weather(city))
        .cloned()
        .map(web::Json)
        .ok_or_else(ApiError::city_not_found)
}
