use serde::Serialize;

use crate::models::block::{Block, SpeakerTurn};
use crate::models::document::Document;

/// 剧本统计信息
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScreenplayProperties {
    /// 场景标题，按出现顺序
    pub scenes: Vec<String>,
    /// 角色名，按首次出现顺序去重
    pub characters: Vec<String>,
    /// 发言次数（双对话计两次）
    pub dialogue_count: usize,
}

impl ScreenplayProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(document: &Document) -> Self {
        let mut props = ScreenplayProperties::new();
        for block in &document.blocks {
            match block {
                Block::SceneHeading { text, .. } => props.scenes.push(text.clone()),
                Block::SpeakerTurn(turn) => props.add_turn(turn),
                Block::DualDialogue(group) => {
                    props.add_turn(&group.left);
                    props.add_turn(&group.right);
                }
                _ => {}
            }
        }
        props
    }

    fn add_turn(&mut self, turn: &SpeakerTurn) {
        self.dialogue_count += 1;
        if !self.characters.contains(&turn.cue.name) {
            self.characters.push(turn.cue.name.clone());
        }
    }
}
