//! Handler模块

use axum::{
    extract::{Query, State},
    Extension,
};

use common::errors::AppError;
use common::middleware::BearerToken;
use common::models::FetchDataQuery;
use common::response::{ErrorMessage, UpstreamResponse};
use crate::service::AuroraClient;
use crate::state::AppState;

/// 使用服务端凭据向 Aurora Vision 认证
#[utoipa::path(
    get,
    path = "/api/authenticate",
    tag = "aurora",
    responses(
        (status = 200, description = "上游响应体，原样转发"),
        (status = 500, description = "上游不可达，响应体为错误信息")
    )
)]
pub async fn authenticate(
    State(state): State<AppState>,
) -> Result<UpstreamResponse, AppError> {
    let client = AuroraClient::new(state.aurora, state.http_client);
    client.authenticate().await
}

/// 查询配置实体的聚合数据
///
/// 查询参数按键值对读取，不做任何校验；重复的参数以 `,` 拼接。
#[utoipa::path(
    get,
    path = "/api/fetchData",
    tag = "aurora",
    params(FetchDataQuery),
    responses(
        (status = 200, description = "上游响应体，原样转发"),
        (status = 401, description = "缺少 Bearer 令牌", body = ErrorMessage),
        (status = 500, description = "上游不可达，响应体为错误信息")
    )
)]
pub async fn fetch_data(
    State(state): State<AppState>,
    Extension(token): Extension<BearerToken>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<UpstreamResponse, AppError> {
    let query = FetchDataQuery::from_pairs(pairs);
    let client = AuroraClient::new(state.aurora, state.http_client);
    client.fetch_data(&query, token.header_value()).await
}
