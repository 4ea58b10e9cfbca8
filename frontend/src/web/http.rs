//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现共享层的 `HttpClient` 抽象，替代 `gloo-net`。

use vitrine_shared::ApiError;
use vitrine_shared::request::{HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// 基于浏览器 fetch 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchClient;

impl FetchClient {
    fn build(req: &HttpRequest) -> Result<Request, ApiError> {
        let headers = Headers::new()
            .map_err(|e| ApiError::RequestBuild(format!("创建 Headers 失败: {:?}", e)))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| ApiError::RequestBuild(format!("设置 Header 失败: {:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| ApiError::RequestBuild(format!("{:?}", e)))
    }

    async fn read_text(response: &Response) -> Result<String, ApiError> {
        let promise = response
            .text()
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| ApiError::Network("无法转换为字符串".to_string()))
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let request = Self::build(&req)?;

        let window = web_sys::window()
            .ok_or_else(|| ApiError::Network("无法获取 window 对象".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ApiError::Network(format!("Response 类型转换失败: {:?}", e)))?;

        let status = response.status();
        let body = Self::read_text(&response).await?;

        Ok(HttpResponse { status, body })
    }
}
