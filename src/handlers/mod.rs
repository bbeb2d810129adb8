pub mod inventories;
pub mod warehouses;

use axum::{http::StatusCode, Json};
use serde_json::json;

pub async fn welcome() -> &'static str {
    "Welcome to the InStock API"
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "instock-api" })))
}
