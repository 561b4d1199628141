use crate::models::{Block, Conf, DialoguePart, DualDialogueGroup, SpeakerTurn};
use crate::parser::classifier::Element;

/// 按顺序组装文档块
///
/// 角色名和其后的括号说明、对白合并为一次发言；带 `^` 的发言与紧挨着的上一次发言合并为双对话。
pub struct Assembler<'c> {
    conf: &'c Conf,
    blocks: Vec<Block>,
    turn: Option<SpeakerTurn>,
}

impl<'c> Assembler<'c> {
    pub fn new(conf: &'c Conf) -> Self {
        Assembler {
            conf,
            blocks: Vec::new(),
            turn: None,
        }
    }

    pub fn push(&mut self, element: Element) {
        match element {
            Element::CharacterCue(cue) => {
                self.finish_turn();
                self.turn = Some(SpeakerTurn::new(cue));
            }
            Element::Parenthetical(text) => self.push_part(DialoguePart::Parenthetical(text)),
            Element::Dialogue(text) => self.push_part(DialoguePart::Dialogue(text)),
            Element::SceneHeading { text, number } => {
                self.push_block(Block::SceneHeading { text, number })
            }
            Element::Action(text) => self.push_block(Block::Action { text }),
            Element::Transition(text) => self.push_block(Block::Transition { text }),
            Element::Centered(text) => self.push_block(Block::Centered { text }),
            Element::Lyric(text) => self.push_block(Block::Lyric { text }),
            Element::PageBreak => self.push_block(Block::PageBreak),
            Element::Section { level, text } => self.push_block(Block::Section { level, text }),
            Element::Synopsis(text) => self.push_block(Block::Synopsis { text }),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        self.finish_turn();
        self.blocks
    }

    fn push_part(&mut self, part: DialoguePart) {
        match &mut self.turn {
            Some(turn) => turn.parts.push(part),
            // 没有角色名的对白按动作处理
            None => {
                let text = match part {
                    DialoguePart::Parenthetical(text) | DialoguePart::Dialogue(text) => text,
                };
                self.blocks.push(Block::Action { text });
            }
        }
    }

    fn push_block(&mut self, block: Block) {
        self.finish_turn();
        self.blocks.push(block);
    }

    fn finish_turn(&mut self) {
        let Some(turn) = self.turn.take() else {
            return;
        };

        if turn.cue.dual && self.conf.use_dual_dialogue {
            if let Some(Block::SpeakerTurn(_)) = self.blocks.last() {
                if let Some(Block::SpeakerTurn(left)) = self.blocks.pop() {
                    self.blocks.push(Block::DualDialogue(DualDialogueGroup { left, right: turn }));
                    return;
                }
            }
        }
        self.blocks.push(Block::SpeakerTurn(turn));
    }
}

/// 把分类结果组装成块序列
pub fn assemble(elements: Vec<Element>, conf: &Conf) -> Vec<Block> {
    let mut assembler = Assembler::new(conf);
    for element in elements {
        assembler.push(element);
    }
    assembler.finish()
}
