use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FountainResult;

/// 解析与渲染配置
///
/// JSON 中缺省的字段取默认值，因此配置文件只需要写出要覆盖的项。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 是否打印标题页
    pub print_title_page: bool,
    /// 是否打印章节
    pub print_sections: bool,
    /// 是否打印概要
    pub print_synopsis: bool,
    /// 是否启用双对话（`^` 标记）
    pub use_dual_dialogue: bool,
    /// 是否打印场景编号
    pub print_scene_numbers: bool,
    /// 是否输出完整的 HTML 页面（带样式表）
    pub standalone: bool,
    /// 角色名后的"接续"扩展
    pub text_contd: String,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            print_title_page: true,
            print_sections: false,
            print_synopsis: true,
            use_dual_dialogue: true,
            print_scene_numbers: true,
            standalone: false,
            text_contd: "(CONT'D)".to_string(),
        }
    }
}

impl Conf {
    /// 从 JSON 文本读取配置
    pub fn from_json_str(json: &str) -> FountainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从 JSON 文件读取配置
    pub fn from_json_file(path: impl AsRef<Path>) -> FountainResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
