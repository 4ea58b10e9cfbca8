//! Maestro API 客户端
//!
//! 纯 Rust 实现，不依赖浏览器：HTTP 能力通过 `HttpClient` 注入，
//! 测试中可以直接替换为 `MockHttpClient`。

use crate::config::ApiConfig;
use crate::date::Timestamp;
use crate::error::{ApiError, Result};
use crate::protocol::{
    ApiRequest, FiltersForConstantsRequest, ListCollectionsRequest, LoginRequest,
    ProductsForConstantsRequest,
};
use crate::request::{HttpClient, HttpRequest};
use crate::session::Session;
use crate::{Collection, FilterOption, Product, ProductQuery};

#[derive(Clone, Debug)]
pub struct MaestroApi<C> {
    config: ApiConfig,
    client: C,
    token: Option<String>,
}

impl<C: HttpClient> MaestroApi<C> {
    /// 创建未认证的客户端（仅可调用 `sign_in`）
    pub fn new(config: ApiConfig, client: C) -> Self {
        Self {
            config,
            client,
            token: None,
        }
    }

    /// 附加 Bearer token，后续请求都会携带
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    async fn call<R: ApiRequest>(&self, req: &R) -> Result<R::Response> {
        let url = self.config.url(&req.path());
        let mut http = HttpRequest::new(&url, R::METHOD);
        if let Some(token) = &self.token {
            http = http.with_bearer(token);
        }
        if R::METHOD.has_body() {
            http = http.with_json(req)?;
        }

        log::debug!("{} {}", R::METHOD.as_str(), url);
        let resp = self.client.send(http).await?;

        if !resp.is_success() {
            return Err(ApiError::Status(resp.status));
        }
        resp.json::<R::Response>()
    }

    /// 登录
    ///
    /// 传输失败、非 2xx、响应不可解析或缺少 accessToken 都返回 `Err`，
    /// 调用方不应区分这些情况。
    pub async fn sign_in(&self, email: &str, password: &str, now: Timestamp) -> Result<Session> {
        let req = LoginRequest {
            username: email.to_string(),
            password: password.to_string(),
        };
        let data = self.call(&req).await?.data.unwrap_or_default();
        let access_token = data
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken)?;

        Ok(Session {
            access_token,
            refresh_token: data.refresh_token,
            expires_in: data.expires_in,
            user: email.to_string(),
            issued_at: now,
        })
    }

    /// 获取全部集合，顺序与服务端一致
    pub async fn list_collections(&self) -> Result<Vec<Collection>> {
        let envelope = self.call(&ListCollectionsRequest).await?;
        Ok(envelope
            .data
            .unwrap_or_default()
            .into_iter()
            .map(Collection::from)
            .collect())
    }

    /// 获取可用于固定槽位的筛选项定义
    pub async fn filters_for_constants(&self, collection_id: i64) -> Result<Vec<FilterOption>> {
        self.call(&FiltersForConstantsRequest { collection_id })
            .await?
            .into_data()
    }

    /// 按筛选条件获取商品目录
    pub async fn products_for_constants(
        &self,
        collection_id: i64,
        query: &ProductQuery,
    ) -> Result<Vec<Product>> {
        let page = self
            .call(&ProductsForConstantsRequest {
                collection_id,
                query,
            })
            .await?
            .into_data()?;
        // 没有商品编码的条目无法固定或排序，直接跳过
        Ok(page
            .data
            .into_iter()
            .filter(|dto| !dto.product_code.is_empty())
            .map(Product::from)
            .collect())
    }
}

#[cfg(test)]
mod tests;
