use std::fmt::Write;

use crate::html::inline::{format_inline, format_lines};
use crate::models::{Block, Conf, DialoguePart, Document, SpeakerTurn, TitleEntry, TitlePage};

const STYLE: &str = include_str!("style.css");

/// HTML 渲染器
///
/// 渲染是纯函数：同一个文档总是得到同样的输出，所有原文都经过转义。
pub struct HtmlRenderer<'c> {
    conf: &'c Conf,
}

impl<'c> HtmlRenderer<'c> {
    pub fn new(conf: &'c Conf) -> Self {
        HtmlRenderer { conf }
    }

    /// 渲染整个文档；`standalone` 时输出带样式表的完整页面
    pub fn render(&self, document: &Document) -> String {
        let body = self.render_body(document);
        if !self.conf.standalone {
            return body;
        }

        let title = document
            .title_page
            .as_ref()
            .and_then(|page| page.get("title"))
            .map(|value| value.lines().join(" "))
            .unwrap_or_else(|| "Untitled".to_string());

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            html_escape::encode_text(&title),
            STYLE,
            body
        )
    }

    fn render_body(&self, document: &Document) -> String {
        let mut out = String::from("<article class=\"screenplay\">\n");
        if self.conf.print_title_page {
            if let Some(page) = &document.title_page {
                out.push_str(&self.render_title_page(page));
            }
        }
        for block in &document.blocks {
            self.render_block(&mut out, block);
        }
        out.push_str("</article>\n");
        out
    }

    /// 标题页，字段按原文顺序输出
    pub fn render_title_page(&self, page: &TitlePage) -> String {
        let mut out = String::from("<section class=\"title-page\">\n");
        for entry in &page.entries {
            render_title_entry(&mut out, entry);
        }
        out.push_str("</section>\n");
        out
    }

    fn render_block(&self, out: &mut String, block: &Block) {
        match block {
            Block::SceneHeading { text, number } => {
                let number = number.as_ref().filter(|_| self.conf.print_scene_numbers);
                match number {
                    Some(number) => {
                        let _ = writeln!(
                            out,
                            "<h3 class=\"scene-heading\" data-scene-number=\"{}\">{}</h3>",
                            html_escape::encode_double_quoted_attribute(number),
                            format_inline(text)
                        );
                    }
                    None => {
                        let _ = writeln!(
                            out,
                            "<h3 class=\"scene-heading\">{}</h3>",
                            format_inline(text)
                        );
                    }
                }
            }
            Block::Action { text } => paragraph(out, "action", &format_lines(text)),
            Block::SpeakerTurn(turn) => render_turn(out, turn),
            Block::DualDialogue(group) => {
                out.push_str("<div class=\"dual-dialogue\">\n<div class=\"dual-dialogue-left\">\n");
                render_turn(out, &group.left);
                out.push_str("</div>\n<div class=\"dual-dialogue-right\">\n");
                render_turn(out, &group.right);
                out.push_str("</div>\n</div>\n");
            }
            Block::Transition { text } => paragraph(out, "transition", &format_inline(text)),
            Block::Centered { text } => paragraph(out, "centered", &format_inline(text)),
            Block::Lyric { text } => paragraph(out, "lyric", &format_inline(text)),
            Block::PageBreak => out.push_str("<hr class=\"page-break\" />\n"),
            Block::Section { level, text } => {
                if self.conf.print_sections {
                    let class = format!("section section-{}", level);
                    paragraph(out, &class, &format_inline(text));
                }
            }
            Block::Synopsis { text } => {
                if self.conf.print_synopsis {
                    paragraph(out, "synopsis", &format_inline(text));
                }
            }
        }
    }
}

fn paragraph(out: &mut String, class: &str, html: &str) {
    let _ = writeln!(out, "<p class=\"{}\">{}</p>", class, html);
}

fn render_turn(out: &mut String, turn: &SpeakerTurn) {
    out.push_str("<div class=\"dialogue-block\">\n");
    paragraph(out, "character", &format_inline(&turn.cue.display_text()));
    for part in &turn.parts {
        match part {
            DialoguePart::Parenthetical(text) => {
                paragraph(out, "parenthetical", &format_inline(text))
            }
            DialoguePart::Dialogue(text) => paragraph(out, "dialogue", &format_inline(text)),
        }
    }
    out.push_str("</div>\n");
}

/// 键转成 CSS class：小写字母数字，空白换成 `-`
fn key_class(key: &str) -> String {
    key.split_whitespace()
        .map(|word| word.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn render_title_entry(out: &mut String, entry: &TitleEntry) {
    let _ = writeln!(
        out,
        "<div class=\"title-page-entry title-page-{}\">",
        html_escape::encode_double_quoted_attribute(&key_class(&entry.key))
    );
    let _ = writeln!(
        out,
        "<span class=\"title-page-key\">{}</span>",
        html_escape::encode_text(&entry.label)
    );
    for line in entry.value.lines() {
        paragraph(out, "title-page-value", &format_inline(line));
    }
    out.push_str("</div>\n");
}
