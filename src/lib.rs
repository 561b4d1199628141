//! 把 Fountain 格式的纯文本剧本解析成结构化文档，并渲染成 HTML。
//!
//! 流程依次为：分块、提取标题页、逐块分类、组装发言、渲染。

pub mod api;
pub mod error;
pub mod html;
pub mod models;
pub mod parser;
pub mod utils;

pub use models::{
    Block,
    CharacterCue,
    Conf,
    Diagnostic,
    DiagnosticKind,
    DialoguePart,
    Document,
    DualDialogueGroup,
    ScreenplayProperties,
    SpeakerTurn,
    TitleEntry,
    TitlePage,
    TitleValue,
};

pub use parser::{FountainParser, ParseOutput};

pub use html::HtmlRenderer;

pub use error::{FountainError, FountainResult};

pub use api::{
    handle_request, parse_fountain_text, render_screenplay, RenderRequest, RenderedResponse,
};

/// 示例剧本
pub const SAMPLE_SCREENPLAY: &str = include_str!("sample.fountain");

/// 解析Fountain格式文本
///
/// # Arguments
///
/// * `script` - Fountain格式的剧本文本
/// * `config` - 配置对象
/// * `generate_html` - 是否生成HTML输出
///
/// # Returns
///
/// 解析结果对象
pub fn parse(script: &str, config: &Conf, generate_html: bool) -> ParseOutput {
    FountainParser::new(config.clone()).parse(script, generate_html)
}

/// 使用默认配置解析出文档结构
pub fn parse_document(script: &str) -> Document {
    FountainParser::default().parse_document(script).0
}

/// 使用默认配置渲染文档
pub fn render(document: &Document) -> String {
    HtmlRenderer::new(&Conf::default()).render(document)
}

/// 剧本文本直接转成 HTML
pub fn to_html(script: &str) -> String {
    render_screenplay(script, &Conf::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let config = Conf::default();
        let result = parse("INT. ROOM - DAY\n\nHello, world!", &config, false);
        assert_eq!(result.document.blocks.len(), 2);
        assert_eq!(result.properties.scenes, vec!["INT. ROOM - DAY".to_string()]);
    }

    #[test]
    fn sample_parses_with_title_page() {
        let document = parse_document(SAMPLE_SCREENPLAY);
        let page = document.title_page.expect("sample has a title page");
        assert_eq!(page.get("title"), Some(&TitleValue::Single("Alien".into())));
    }
}
