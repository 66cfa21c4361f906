//! Users API handlers.

use actix_web::{get, web};
use dashboard_types::User;
use tokio::time::sleep;

use crate::api::state::AppState;

/// Return the demo user profile.
///
/// The path identifier is accepted for wire compatibility but not used for
/// lookup; every identifier resolves to the same fixture.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = String, Path, description = "User identifier; accepted but not consulted")
    ),
    responses(
        (status = 200, description = "The demo user profile", body = User)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/api/users/{id}")]
pub async fn get_user(state: web::Data<AppState>, _id: web::Path<String>) -> web::Json<User> {
    sleep(state.delays().users).await;
    web::Json(state.fixtures().user().clone())
}
