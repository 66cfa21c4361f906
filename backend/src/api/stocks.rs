//! Stocks API handlers.

use actix_web::{get, web};
use dashboard_types::Stock;
use tokio::time::sleep;

use crate::api::state::AppState;

/// Return the fixed stock list, in quote order.
#[utoipa::path(
    get,
    path = "/api/stocks",
    responses(
        (status = 200, description = "Quotes in their fixed order", body = [Stock])
    ),
    tags = ["stocks"],
    operation_id = "getStocks"
)]
#[get("/api/stocks")]
pub async fn get_stocks(state: web::Data<AppState>) -> web::Json<Vec<Stock>> {
    sleep(state.delays().stocks).await;
    web::Json(state.fixtures().stocks().to_vec())
}
