use crate::models::{Diagnostic, DiagnosticKind, TitlePage};
use crate::parser::classifier::{is_scene_heading, is_transition};
use crate::parser::text_processor::RawBlock;
use crate::utils::fountain_constants::{
    CENTERED, CHARACTER_FORCE, FORCED_TRANSITION, SECTION, SYNOPSIS, TITLE_PAGE_KEY, TRANSITION_TO,
};

/// 标题页键最多允许的单词数
const MAX_KEY_WORDS: usize = 4;

/// 标题页中的一行
enum TitleLine<'a> {
    Key { label: &'a str, value: &'a str },
    Continuation(&'a str),
}

/// 能被识别成正文的行不作为标题页的键
fn is_body_line(line: &str) -> bool {
    let line = line.trim();
    TRANSITION_TO.is_match(line)
        || is_transition(line)
        || is_scene_heading(line)
        || FORCED_TRANSITION.is_match(line)
        || CENTERED.is_match(line)
        || SECTION.is_match(line)
        || SYNOPSIS.is_match(line)
        || CHARACTER_FORCE.is_match(line)
}

/// 解析 `Key: value` 行；键里不能有句子标点，避免把正文误当成标题页
fn parse_key_line(line: &str) -> Option<(&str, &str)> {
    if is_body_line(line) {
        return None;
    }
    let caps = TITLE_PAGE_KEY.captures(line)?;
    let label = caps.get(1)?.as_str();
    let value = caps.get(2).map_or("", |m| m.as_str());

    let words = label.split_whitespace().count();
    if words == 0 || words > MAX_KEY_WORDS {
        return None;
    }
    if label.contains(['.', '!', '?', ',', '(', ')']) {
        return None;
    }
    Some((label, value))
}

fn classify_title_line(line: &str) -> Option<TitleLine<'_>> {
    if line.starts_with([' ', '\t']) {
        return Some(TitleLine::Continuation(line.trim()));
    }
    parse_key_line(line).map(|(label, value)| TitleLine::Key { label, value })
}

/// 从文档开头提取标题页
///
/// 逐块贪婪匹配：遇到第一个不符合标题页格式的块就停止，
/// 该块及其后的块都作为正文返回。
pub fn extract_title_page<'b, 'a>(
    blocks: &'b [RawBlock<'a>],
    diagnostics: &mut Vec<Diagnostic>,
) -> (Option<TitlePage>, &'b [RawBlock<'a>]) {
    let mut title_page = TitlePage::default();
    let mut consumed = 0;

    for block in blocks {
        if parse_key_line(block.first_line()).is_none() {
            break;
        }

        let parsed: Option<Vec<TitleLine>> =
            block.lines.iter().map(|line| classify_title_line(line)).collect();
        let Some(parsed) = parsed else {
            Diagnostic::new(
                DiagnosticKind::MalformedTitlePage,
                block.start_line,
                format!("无法解析的标题页块，按正文处理: {}", block.first_line()),
            )
            .report(diagnostics);
            break;
        };

        let mut current = None;
        for line in parsed {
            match line {
                TitleLine::Key { label, value } => {
                    let entry = title_page.insert_key(label);
                    entry.push_value(value);
                    current = Some(entry.key.clone());
                }
                TitleLine::Continuation(value) => {
                    // 第一行一定是键，所以这里总有当前字段
                    if let Some(key) = &current {
                        title_page.insert_key(key).push_value(value);
                    }
                }
            }
        }
        consumed += 1;
    }

    let title_page = if title_page.is_empty() { None } else { Some(title_page) };
    (title_page, &blocks[consumed..])
}
