use lazy_static::lazy_static;
use regex::Regex;

/// 常见的转场写法（不以 `TO:` 结尾的那些）
pub const TRANSITIONS: &[&str] = &[
    "FADE IN:",
    "FADE OUT.",
    "FADE OUT",
    "FADE TO BLACK.",
    "CUT TO BLACK.",
    "BACK TO:",
    "INTERCUT WITH:",
    "END CREDITS.",
];

/// 场景标题中的时间标记
pub const TIMES_OF_DAY: &[&str] = &[
    "DAY",
    "NIGHT",
    "CONTINUOUS",
    "LATER",
    "MOMENTS LATER",
    "MORNING",
    "AFTERNOON",
    "EVENING",
    "DAWN",
    "DUSK",
    "SAME",
    "SAME TIME",
];

lazy_static! {
    pub static ref SCENE_HEADING: Regex =
        Regex::new(r"(?i)^[ \t]*(?:int\.?/ext|i\.?/e|int|ext|est)[. ]").unwrap();
    pub static ref FORCED_SCENE_HEADING: Regex = Regex::new(r"^[ \t]*\.[^.\s]").unwrap();
    /// `- DAY` 这样的结尾，第 1 组为时间
    pub static ref TIME_OF_DAY_SUFFIX: Regex = Regex::new(r"\s[-–—]\s*([^-–—]+?)\s*$").unwrap();
    pub static ref SCENE_NUMBER: Regex = Regex::new(r"\s*#([^#\s][^#]*)#\s*$").unwrap();
    pub static ref TRANSITION_TO: Regex = Regex::new(r"^[^\p{Ll}]*\p{Lu}[^\p{Ll}]*TO:$").unwrap();
    pub static ref FORCED_TRANSITION: Regex = Regex::new(r"^[ \t]*>\s*(.*?)\s*$").unwrap();
    pub static ref CENTERED: Regex = Regex::new(r"^[ \t]*>\s*(.+?)\s*<\s*$").unwrap();
    pub static ref PARENTHETICAL: Regex = Regex::new(r"^[ \t]*\(.*\)\s*$").unwrap();
    pub static ref CHARACTER_EXTENSION: Regex = Regex::new(r"^([^(]*?)\s*(\(.*\))\s*$").unwrap();
    pub static ref PAGE_BREAK: Regex = Regex::new(r"^\s*={3,}\s*$").unwrap();
    pub static ref SECTION: Regex = Regex::new(r"^[ \t]*(#+)\s*(.*)$").unwrap();
    pub static ref SYNOPSIS: Regex = Regex::new(r"^[ \t]*=(?:([^=].*))?$").unwrap();
    pub static ref LYRIC: Regex = Regex::new(r"^[ \t]*~\s*(.*)$").unwrap();
    pub static ref ACTION_FORCE: Regex = Regex::new(r"^(\s*)(!)(.*)$").unwrap();
    pub static ref CHARACTER_FORCE: Regex = Regex::new(r"^[ \t]*@").unwrap();
    /// 标题页的 `Key: value` 行
    pub static ref TITLE_PAGE_KEY: Regex = Regex::new(r"^([^\s:][^:]*?)\s*:\s*(.*)$").unwrap();
}
