//! Aurora Vision API 代理服务
//!
//! 位于浏览器前端与 Aurora Vision API 之间，提供以下功能：
//! - 注入服务端持有的 API Key 与 Basic Auth 凭据
//! - 数据查询时转发调用方的 Bearer 令牌
//! - 原样转发上游响应体与状态码

mod handlers;
mod routes;
mod service;
mod state;

use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use common::config::{AppConfig, AuroraConfig};
use common::middleware::request_id::request_id_middleware;
use state::AppState;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

const SERVICE_NAME: &str = "aurora-proxy";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aurora Vision 代理 API",
        version = "0.1.0",
        description = "Aurora Vision API 凭据注入代理服务"
    ),
    paths(
        handlers::authenticate,
        handlers::fetch_data,
        routes::health_check,
    ),
    components(schemas(
        common::response::ErrorMessage,
        routes::HealthResponse,
    )),
    tags(
        (name = "aurora", description = "Aurora Vision 转发端点"),
        (name = "health", description = "健康检查端点")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载 .env（已存在的环境变量优先）
    dotenvy::dotenv().ok();

    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 加载配置
    let config = AppConfig::load_with_service(SERVICE_NAME);
    let aurora = AuroraConfig::load();

    let missing = aurora.missing_vars();
    if !missing.is_empty() {
        warn!(?missing, "Aurora Vision 配置不完整，上游调用将失败");
    }

    // 创建应用状态与路由
    let state = AppState::new(config.clone(), aurora);
    let app = create_router(state);

    // 启动服务
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("绑定地址失败: {}", addr))?;
    info!(service = %config.service_name, address = %addr, "启动代理服务");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务运行失败")?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// 等待 Ctrl+C 信号
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("收到关闭信号"),
        Err(e) => {
            error!(error = %e, "无法监听 Ctrl+C，服务将持续运行");
            std::future::pending::<()>().await;
        }
    }
}
