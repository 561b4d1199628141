use std::time::Instant;

use serde::Serialize;

use crate::html::HtmlRenderer;
use crate::models::{Conf, Diagnostic, DiagnosticKind, Document, ScreenplayProperties};
use crate::parser::assembler::assemble;
use crate::parser::classifier::classify;
use crate::parser::text_processor::split_blocks;
use crate::parser::title_page::extract_title_page;

/// 解析结果
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    pub document: Document,
    pub properties: ScreenplayProperties,
    pub diagnostics: Vec<Diagnostic>,
    /// 解析耗时（毫秒）
    pub parse_time: u64,
    pub script_html: Option<String>,
    pub title_html: Option<String>,
}

/// Fountain 解析器
///
/// 不保存跨调用的状态，同一个解析器可以在多个线程中同时使用。
#[derive(Debug, Clone, Default)]
pub struct FountainParser {
    conf: Conf,
}

impl FountainParser {
    pub fn new(conf: Conf) -> Self {
        FountainParser { conf }
    }

    /// 只解析出文档结构，附带解析中的提示
    pub fn parse_document(&self, script: &str) -> (Document, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();

        let blocks = split_blocks(script);
        log::debug!("【parse】原始块数量: {}", blocks.len());
        if blocks.is_empty() {
            Diagnostic::new(DiagnosticKind::EmptyInput, 0, "剧本没有任何内容")
                .report(&mut diagnostics);
            return (Document::default(), diagnostics);
        }

        let (title_page, body) = extract_title_page(&blocks, &mut diagnostics);
        if let Some(page) = &title_page {
            log::debug!("【parse】标题页字段数量: {}", page.entries.len());
        }

        let elements = classify(body, &self.conf, &mut diagnostics);
        log::debug!("【parse】分类元素数量: {}", elements.len());

        let blocks = assemble(elements, &self.conf);
        log::debug!("【parse】文档块数量: {}", blocks.len());

        (Document { title_page, blocks }, diagnostics)
    }

    /// 解析 Fountain 格式文本
    ///
    /// # Arguments
    ///
    /// * `script` - Fountain 格式的剧本文本
    /// * `generate_html` - 是否同时生成 HTML 输出
    pub fn parse(&self, script: &str, generate_html: bool) -> ParseOutput {
        let started = Instant::now();
        let (document, diagnostics) = self.parse_document(script);
        let properties = ScreenplayProperties::from_document(&document);

        let (script_html, title_html) = if generate_html {
            let renderer = HtmlRenderer::new(&self.conf);
            let title_html = document
                .title_page
                .as_ref()
                .map(|page| renderer.render_title_page(page));
            (Some(renderer.render(&document)), title_html)
        } else {
            (None, None)
        };

        ParseOutput {
            document,
            properties,
            diagnostics,
            parse_time: started.elapsed().as_millis() as u64,
            script_html,
            title_html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, TitleValue};

    #[test]
    fn empty_input_is_reported_not_failed() {
        let parser = FountainParser::default();
        let (document, diags) = parser.parse_document("  \n\n");
        assert!(document.is_empty());
        assert_eq!(diags[0].kind, DiagnosticKind::EmptyInput);
    }

    #[test]
    fn title_page_then_body() {
        let parser = FountainParser::default();
        let (document, diags) =
            parser.parse_document("Title:\n    Alien\nAuthor:\n    Dan O'Bannon\n\nINT. MESS\n");
        assert!(diags.is_empty());
        let page = document.title_page.unwrap();
        assert_eq!(page.get("Title"), Some(&TitleValue::Single("Alien".into())));
        assert_eq!(
            document.blocks,
            vec![Block::SceneHeading { text: "INT. MESS".into(), number: None }]
        );
    }

    #[test]
    fn html_is_only_generated_on_request() {
        let parser = FountainParser::default();
        let output = parser.parse("Title: Alien\n\nINT. MESS\n", false);
        assert!(output.script_html.is_none());
        let output = parser.parse("Title: Alien\n\nINT. MESS\n", true);
        assert!(output.script_html.unwrap().contains("scene-heading"));
        assert!(output.title_html.unwrap().contains("title-page"));
    }
}
