//! Endpoint-level tests for the fixture service.
//!
//! Each test assembles the real application with a zeroed latency profile and
//! drives it through actix's in-process test service.

use std::time::{Duration, Instant};

use actix_web::http::{StatusCode, header};
use actix_web::{test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use backend::api::state::AppState;
use backend::fixtures::{DelayProfile, FixtureSet};
use backend::server::build_app;

fn test_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(FixtureSet::new(), DelayProfile::none()))
}

async fn get_json(path: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(build_app(test_state())).await;
    let request = actix_test::TestRequest::get().uri(path).to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}

#[rstest]
#[case::numeric("123")]
#[case::other_numeric("999")]
#[case::non_numeric("abc")]
#[actix_web::test]
async fn users_returns_the_fixture_regardless_of_id(#[case] id: &str) {
    let (status, body) = get_json(&format!("/api/users/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 123, "name": "John Doe", "city": "London" })
    );
}

#[rstest]
#[case::moscow(
    "Moscow",
    json!({ "city": "Moscow", "temperature": 15.0, "description": "Cloudy" })
)]
#[case::london(
    "London",
    json!({ "city": "London", "temperature": 18.0, "description": "Sunny" })
)]
#[actix_web::test]
async fn weather_returns_the_fixture_for_known_cities(
    #[case] city: &str,
    #[case] expected: Value,
) {
    let (status, body) = get_json(&format!("/api/weather?city={city}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[rstest]
#[case::unknown_city("/api/weather?city=Paris")]
#[case::lowercase("/api/weather?city=moscow")]
#[case::partial_match("/api/weather?city=Mos")]
#[case::missing_parameter("/api/weather")]
#[actix_web::test]
async fn weather_answers_not_found_with_the_localised_envelope(#[case] path: &str) {
    let (status, body) = get_json(path).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Город не найден" }));
}

#[actix_web::test]
async fn stocks_returns_the_fixed_list_in_order() {
    let (status, body) = get_json("/api/stocks").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "symbol": "AAPL", "price": 150.25, "change": 1.5 },
            { "symbol": "GOOG", "price": 2750.75, "change": -10.2 }
        ])
    );
}

#[actix_web::test]
async fn dashboard_returns_three_widgets_in_order() {
    let (status, body) = get_json("/api/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "component": "UserProfile", "settings": { "userId": 123 } },
            { "id": 2, "component": "Weather", "settings": { "defaultCity": "Moscow" } },
            { "id": 3, "component": "StockTicker", "settings": { "symbols": ["AAPL", "GOOG"] } }
        ])
    );
}

#[actix_web::test]
async fn dashboard_is_order_stable_across_calls() {
    let app = actix_test::init_service(build_app(test_state())).await;

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let request = actix_test::TestRequest::get()
            .uri("/api/dashboard")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        bodies.push(actix_test::read_body(response).await);
    }

    assert_eq!(bodies[0], bodies[1]);
}

#[actix_web::test]
async fn responses_allow_cross_origin_access() {
    let app = actix_test::init_service(build_app(test_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/stocks")
        .insert_header((header::ORIGIN, "http://localhost:5173"))
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "permissive CORS must acknowledge the origin"
    );
}

#[actix_web::test]
async fn endpoints_honour_the_configured_delay() {
    let delays = DelayProfile {
        dashboard: Duration::from_millis(50),
        ..DelayProfile::none()
    };
    let state = web::Data::new(AppState::new(FixtureSet::new(), delays));
    let app = actix_test::init_service(build_app(state)).await;

    let started = Instant::now();
    let request = actix_test::TestRequest::get()
        .uri("/api/dashboard")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        started.elapsed() >= Duration::from_millis(50),
        "the dashboard response must wait for its artificial delay"
    );
}
