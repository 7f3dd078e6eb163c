/// 题目 API 客户端
///
/// 封装与题目代理 API 的交互：`GET {base}/select?titleSlug=<slug>`
use crate::config::Config;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use tracing::debug;

/// 题面提供者
///
/// 按 slug 返回题面原始 HTML
#[async_trait]
pub trait ProblemProvider: Send + Sync {
    async fn fetch_statement(&self, slug: &str) -> AppResult<String>;
}

/// 基于 reqwest 的题目客户端
pub struct ProblemClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProblemClient {
    /// 创建新的题目客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("cph/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Config(format!("无法创建 HTTP 客户端: {}", e)))?;

        Ok(Self::with_client(http, &config.api_base_url))
    }

    /// 使用已构建好的 reqwest 客户端
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/select", self.base_url)
    }
}

#[async_trait]
impl ProblemProvider for ProblemClient {
    async fn fetch_statement(&self, slug: &str) -> AppResult<String> {
        let endpoint = self.endpoint();
        debug!("请求题目: {}?titleSlug={}", endpoint, slug);

        let response = self
            .http
            .get(&endpoint)
            .query(&[("titleSlug", slug)])
            .send()
            .await
            .map_err(|e| AppError::fetch_failed(slug, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch_failed(
                slug,
                format!("API 返回状态码 {}", status),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::fetch_failed(slug, e))?;

        parse_statement(slug, &body)
    }
}

/// 从响应体中取出 `question` 字段
///
/// 响应必须是 JSON 对象，且 `question` 为非空字符串
pub fn parse_statement(slug: &str, body: &str) -> AppResult<String> {
    let parsed: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| AppError::fetch_failed(slug, format!("响应不是合法 JSON: {}", e)))?;

    let Some(object) = parsed.as_object() else {
        return Err(AppError::fetch_failed(slug, "响应不是 JSON 对象"));
    };

    match object.get("question").and_then(|q| q.as_str()) {
        Some(question) if !question.trim().is_empty() => Ok(question.to_string()),
        _ => Err(AppError::fetch_failed(
            slug,
            "No problem statement found for this problem",
        )),
    }
}
