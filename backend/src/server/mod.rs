//! HTTP server assembly.
//!
//! Builds the actix application (fixture state, permissive CORS, the four
//! mock routes) and runs it on the configured address. `build_app` is shared
//! with in-process test servers.

pub mod config;

pub use config::ServerConfig;

use actix_cors::Cors;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer, web};

use crate::api::state::AppState;
use crate::api::{dashboard, stocks, users, weather};
use crate::fixtures::FixtureSet;

/// Assemble the application served by [`run`].
pub fn build_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Cors::permissive())
        .service(users::get_user)
        .service(weather::get_weather)
        .service(stocks::get_stocks)
        .service(dashboard::get_dashboard)
}

/// Bind and run the mock API server until shutdown.
///
/// # Errors
///
/// Returns an error when the configured address cannot be bound.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(FixtureSet::new(), config.delays()));
    HttpServer::new(move || build_app(state.clone()))
        .bind(config.bind_addr())?
        .run()
        .await
}
