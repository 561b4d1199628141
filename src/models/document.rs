use serde::Serialize;

use crate::models::block::Block;
use crate::models::title_page::TitlePage;

/// 解析后的剧本：可选的标题页加上按原文顺序排列的块
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub title_page: Option<TitlePage>,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.title_page.is_none() && self.blocks.is_empty()
    }
}
