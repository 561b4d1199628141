//! 对外的请求处理接口
//!
//! 这里只负责校验请求和包装结果，解析和渲染全部交给 [`FountainParser`] 与 [`HtmlRenderer`]。

use serde::{Deserialize, Serialize};

use crate::error::{FountainError, FountainResult};
use crate::html::HtmlRenderer;
use crate::models::Conf;
use crate::parser::FountainParser;

/// 请求体：`{"screenplay": "..."}`
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    pub screenplay: Option<String>,
    #[serde(default)]
    pub config: Option<Conf>,
}

/// 渲染结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedResponse {
    pub content_type: &'static str,
    pub body: String,
}

/// 处理一次渲染请求
///
/// 只接受 POST；请求体必须带非空的 `screenplay` 字段。
pub async fn handle_request(method: &str, body: &str) -> FountainResult<RenderedResponse> {
    if !method.eq_ignore_ascii_case("POST") {
        return Err(FountainError::UnsupportedMethod(method.to_string()));
    }

    let request: RenderRequest = serde_json::from_str(body)?;
    let screenplay = request
        .screenplay
        .filter(|s| !s.is_empty())
        .ok_or(FountainError::MissingScreenplay)?;

    let conf = request.config.unwrap_or_default();
    log::info!("【api】渲染剧本，长度: {}", screenplay.len());
    Ok(RenderedResponse {
        content_type: "text/html",
        body: render_screenplay(&screenplay, &conf),
    })
}

/// 把剧本文本渲染成 HTML
pub fn render_screenplay(screenplay: &str, conf: &Conf) -> String {
    let parser = FountainParser::new(conf.clone());
    let (document, _) = parser.parse_document(screenplay);
    HtmlRenderer::new(conf).render(&document)
}

/// 解析剧本并以 JSON 返回结构化结果
pub async fn parse_fountain_text(text: String, config: Option<Conf>) -> String {
    let parser = FountainParser::new(config.unwrap_or_default());
    let result = parser.parse(&text, false);
    serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())
}
