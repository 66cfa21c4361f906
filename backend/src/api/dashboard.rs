//! Dashboard API handlers.

use actix_web::{get, web};
use dashboard_types::WidgetConfig;
use tokio::time::sleep;

use crate::api::state::AppState;

/// Return the dashboard layout, in render order.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Widget configurations in render order", body = [WidgetConfig])
    ),
    tags = ["dashboard"],
    operation_id = "getDashboardConfig"
)]
#[get("/api/dashboard")]
pub async fn get_dashboard(state: web::Data<AppState>) -> web::Json<Vec<WidgetConfig>> {
    sleep(state.delays().dashboard).await;
    web::Json(state.fixtures().dashboard().to_vec())
}
