//! Service banner at `/`.

use axum::{Json, Router, extract::State, routing::get};
use core_config::AppInfo;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct Banner {
    #[schema(example = "REST APIs for the Products service")]
    pub name: &'static str,
    pub version: &'static str,
    /// Where the product collection lives
    #[schema(example = "/api/products")]
    pub paths: &'static str,
}

/// Service name, version and entry path
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses((status = 200, description = "Service banner", body = Banner))
)]
pub async fn index(State(app): State<AppInfo>) -> Json<Banner> {
    Json(Banner {
        name: "REST APIs for the Products service",
        version: app.version,
        paths: "/api/products",
    })
}

pub fn router(app: AppInfo) -> Router {
    Router::new().route("/", get(index)).with_state(app)
}
