//! REST API 客户端
//!
//! 通过 `ApiRequest` 把请求类型与路径、方法、响应类型绑定在一起。

use gloo_net::http::Request;
use thiserror::Error;
use web_sys::RequestCredentials;
use workdeck_shared::HEADER_AUTHORIZATION;
use workdeck_shared::protocol::{ApiRequest, HttpMethod};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("网络错误: {0}")]
    Network(String),
    #[error("请求 {path} 失败: HTTP {status}")]
    Status { path: &'static str, status: u16 },
    #[error("响应解析失败: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送强类型请求并获取解析后的响应
    pub async fn send<T: ApiRequest>(&self, req: &T) -> Result<T::Response, ApiError> {
        let url = self.url(T::PATH);

        // 1. 构造请求，会话 Cookie 与 Bearer Token 都带上
        let mut builder = match T::METHOD {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        }
        .credentials(RequestCredentials::Include);

        if let Some(token) = &self.token {
            builder = builder.header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }

        // 2. 发送
        let res = match T::METHOD {
            HttpMethod::Get => builder.send().await,
            HttpMethod::Post => builder
                .json(req)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        // 3. 检查状态码
        if !res.ok() {
            return Err(ApiError::Status {
                path: T::PATH,
                status: res.status(),
            });
        }

        // 4. 解析响应，空响应体按 null 处理（对应 `()`）
        let text = res
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = if text.trim().is_empty() {
            "null"
        } else {
            text.as_str()
        };
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
