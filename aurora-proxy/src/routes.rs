//! 路由模块

use axum::{extract::State, middleware, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use common::middleware::require_bearer_token;
use crate::handlers;
use crate::state::AppState;

/// 创建代理路由
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/authenticate", get(handlers::authenticate))
        .route(
            "/api/fetchData",
            get(handlers::fetch_data).route_layer(middleware::from_fn(require_bearer_token)),
        )
        .route("/api/health", get(health_check))
}

/// 代理健康检查
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "代理运行正常", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// 健康检查响应
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}
