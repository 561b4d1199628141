use serde::Serialize;

/// 不影响解析结果的提示类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// 规范化后没有任何内容
    EmptyInput,
    /// 看起来像标题页、但无法完整解析的块，已按正文处理
    MalformedTitlePage,
    /// 角色名后面没有任何对白
    UnterminatedSpeakerRun,
}

/// 解析过程中的提示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 起始行号（从 0 开始）
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            kind,
            line,
            message: message.into(),
        }
    }

    /// 记录日志并收集
    pub(crate) fn report(self, sink: &mut Vec<Diagnostic>) {
        log::warn!("【parse】{:?} (第{}行): {}", self.kind, self.line + 1, self.message);
        sink.push(self);
    }
}
