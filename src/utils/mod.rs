pub mod fountain_constants;

/// 至少含一个大写字母且不含小写字母
pub fn is_upper_text(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}
