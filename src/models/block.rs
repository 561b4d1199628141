use serde::Serialize;

/// 角色名（对白的说话人）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterCue {
    /// 去掉 `@`、`^` 和扩展后的角色名
    pub name: String,
    /// 角色名后的括号扩展，例如 `(V.O.)`、`(CONT'D)`
    pub extension: Option<String>,
    /// 扩展是否为"接续"标记
    pub continued: bool,
    /// 是否带有双对话标记 `^`
    pub dual: bool,
}

impl CharacterCue {
    pub fn new(name: impl Into<String>) -> Self {
        CharacterCue {
            name: name.into(),
            extension: None,
            continued: false,
            dual: false,
        }
    }

    /// 角色名加扩展，用于显示
    pub fn display_text(&self) -> String {
        match &self.extension {
            Some(ext) => format!("{} {}", self.name, ext),
            None => self.name.clone(),
        }
    }
}

/// 角色名之后的一行对白内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum DialoguePart {
    Parenthetical(String),
    Dialogue(String),
}

/// 一次发言：角色名加上其后的括号说明和对白
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakerTurn {
    pub cue: CharacterCue,
    pub parts: Vec<DialoguePart>,
}

impl SpeakerTurn {
    pub fn new(cue: CharacterCue) -> Self {
        SpeakerTurn { cue, parts: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// 左右并排的两段发言
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DualDialogueGroup {
    pub left: SpeakerTurn,
    pub right: SpeakerTurn,
}

/// 文档中的块
///
/// 新增块类型时，组装器和渲染器里的 match 都需要同步处理。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    SceneHeading { text: String, number: Option<String> },
    Action { text: String },
    SpeakerTurn(SpeakerTurn),
    DualDialogue(DualDialogueGroup),
    Transition { text: String },
    Centered { text: String },
    Lyric { text: String },
    PageBreak,
    Section { level: usize, text: String },
    Synopsis { text: String },
}

impl Block {
    /// 块类型名，同时也是渲染时使用的 CSS class 后缀
    pub fn kind(&self) -> &'static str {
        match self {
            Block::SceneHeading { .. } => "scene_heading",
            Block::Action { .. } => "action",
            Block::SpeakerTurn(_) => "speaker_turn",
            Block::DualDialogue(_) => "dual_dialogue",
            Block::Transition { .. } => "transition",
            Block::Centered { .. } => "centered",
            Block::Lyric { .. } => "lyric",
            Block::PageBreak => "page_break",
            Block::Section { .. } => "section",
            Block::Synopsis { .. } => "synopsis",
        }
    }
}
