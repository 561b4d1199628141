use serde::Serialize;

/// 标题页字段的值：单行或多行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TitleValue {
    Single(String),
    Lines(Vec<String>),
}

impl TitleValue {
    pub fn lines(&self) -> Vec<&str> {
        match self {
            TitleValue::Single(s) => vec![s.as_str()],
            TitleValue::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }

    fn push(&mut self, line: String) {
        match self {
            TitleValue::Single(s) if s.is_empty() => *s = line,
            TitleValue::Single(s) => {
                let first = std::mem::take(s);
                *self = TitleValue::Lines(vec![first, line]);
            }
            TitleValue::Lines(lines) => lines.push(line),
        }
    }
}

/// 标题页中的一个字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleEntry {
    /// 规范化后的键（小写、去空白）
    pub key: String,
    /// 原文中的键
    pub label: String,
    pub value: TitleValue,
}

/// 标题页，字段按原文顺序保存
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TitlePage {
    pub entries: Vec<TitleEntry>,
}

impl TitlePage {
    pub fn normalize_key(key: &str) -> String {
        key.trim().to_lowercase()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按键查找，不区分大小写
    pub fn get(&self, key: &str) -> Option<&TitleValue> {
        let key = Self::normalize_key(key);
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// 添加一个字段；键已存在时返回已有的字段，值会追加到它后面
    pub(crate) fn insert_key(&mut self, label: &str) -> &mut TitleEntry {
        let key = Self::normalize_key(label);
        let pos = match self.entries.iter().position(|e| e.key == key) {
            Some(pos) => pos,
            None => {
                self.entries.push(TitleEntry {
                    key,
                    label: label.trim().to_string(),
                    value: TitleValue::Single(String::new()),
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos]
    }
}

impl TitleEntry {
    pub(crate) fn push_value(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() {
            self.value.push(line.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_grow_from_single_to_lines() {
        let mut page = TitlePage::default();
        let entry = page.insert_key("Credit");
        entry.push_value("written by");
        assert_eq!(page.get("credit"), Some(&TitleValue::Single("written by".into())));

        page.insert_key("CREDIT").push_value("and others");
        assert_eq!(
            page.get("Credit"),
            Some(&TitleValue::Lines(vec!["written by".into(), "and others".into()]))
        );
        assert_eq!(page.entries.len(), 1);
    }
}
