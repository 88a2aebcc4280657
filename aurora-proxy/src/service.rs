//! Aurora Vision API 调用模块

use std::sync::Arc;

use axum::http::HeaderValue;

use common::config::AuroraConfig;
use common::errors::AppResult;
use common::models::FetchDataQuery;
use common::response::{relay, UpstreamResponse};
use tracing::debug;

/// 认证请求携带服务端 API Key 的请求头
pub const API_KEY_HEADER: &str = "X-AuroraVision-ApiKey";
/// 数据请求携带调用方令牌的请求头
pub const TOKEN_HEADER: &str = "X-AuroraVision-Token";
/// 聚合数据查询使用的时区
pub const TIME_ZONE: &str = "Asia/Singapore";

/// Aurora Vision 客户端
///
/// 每个请求都附带配置的 Basic Auth 凭据。
pub struct AuroraClient {
    config: Arc<AuroraConfig>,
    http_client: reqwest::Client,
}

impl AuroraClient {
    /// 创建新的客户端实例
    pub fn new(config: Arc<AuroraConfig>, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// 使用服务端 API Key 调用认证地址
    pub async fn authenticate(&self) -> AppResult<UpstreamResponse> {
        debug!(url = %self.config.auth_url, "authenticating with Aurora Vision");

        let response = self
            .http_client
            .get(&self.config.auth_url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await?;

        relay(response).await
    }

    /// 代表持有 `token` 的调用方查询聚合数据
    pub async fn fetch_data(
        &self,
        query: &FetchDataQuery,
        token: &HeaderValue,
    ) -> AppResult<UpstreamResponse> {
        let url = data_url(&self.config, query);
        debug!(url = %url, "fetching aggregated data from Aurora Vision");

        let response = self
            .http_client
            .get(&url)
            .header(TOKEN_HEADER, token.clone())
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await?;

        relay(response).await
    }
}

/// 构造聚合数据 URL
///
/// 参数按原样拼接，不重新编码。
pub fn data_url(config: &AuroraConfig, query: &FetchDataQuery) -> String {
    format!(
        "{}/{}/aggregated/{}/{}/{}?startDate={}&endDate={}&timeZone={}",
        config.base_url,
        query.resource,
        config.entity_id,
        query.data_type,
        query.value_type,
        query.start_date,
        query.end_date,
        TIME_ZONE,
    )
}
