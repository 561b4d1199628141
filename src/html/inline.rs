use lazy_static::lazy_static;
use regex::Regex;

// 转义的 `\*` 和 `\_` 换成字符实体；原文里的 `&` 已经转义，不会混淆
const ESCAPED_STAR: &str = "&#42;";
const ESCAPED_UNDERSCORE: &str = "&#95;";

lazy_static! {
    static ref BOLD_ITALIC: Regex = Regex::new(r"\*{3}([^*]+?)\*{3}").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*{2}([^*]+?)\*{2}").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*([^*\s][^*]*?)\*").unwrap();
    static ref UNDERLINE: Regex = Regex::new(r"_([^_\s][^_]*?)_").unwrap();
}

/// 转义 HTML 并处理行内样式
///
/// 只支持不嵌套的 `***粗斜体***`、`**粗体**`、`*斜体*` 和 `_下划线_`。
pub fn format_inline(text: &str) -> String {
    let escaped = html_escape::encode_text(text);
    let text = escaped
        .replace("\\*", ESCAPED_STAR)
        .replace("\\_", ESCAPED_UNDERSCORE);

    let text = BOLD_ITALIC.replace_all(&text, "<strong><em>$1</em></strong>");
    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    let text = ITALIC.replace_all(&text, "<em>$1</em>");
    UNDERLINE.replace_all(&text, "<u>$1</u>").into_owned()
}

/// 多行文本：每行单独处理，用 `<br />` 连接
pub fn format_lines(text: &str) -> String {
    text.split('\n').map(format_inline).collect::<Vec<_>>().join("<br />")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(format_inline("<b>R&D</b>"), "&lt;b&gt;R&amp;D&lt;/b&gt;");
    }

    #[test]
    fn emphasis() {
        assert_eq!(format_inline("**Hungrily** eats"), "<strong>Hungrily</strong> eats");
        assert_eq!(format_inline("a *big* _cat_"), "a <em>big</em> <u>cat</u>");
        assert_eq!(format_inline("***no***"), "<strong><em>no</em></strong>");
    }

    #[test]
    fn escaped_markers_are_literal() {
        assert_eq!(format_inline(r"\*not italic\*"), "&#42;not italic&#42;");
        assert_eq!(format_inline(r"snake\_case_"), "snake&#95;case_");
        assert_eq!(format_inline("2 * 3 * 4"), "2 * 3 * 4");
    }

    #[test]
    fn private_use_characters_pass_through() {
        let text = "\u{E000}a\u{E001}";
        assert_eq!(format_inline(text), text);
        assert_eq!(format_inline("&#42;"), "&amp;#42;");
    }

    #[test]
    fn lines_are_joined_with_breaks() {
        assert_eq!(format_lines("one\ntwo"), "one<br />two");
    }
}
