/// 由空行分隔的一段连续非空行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// 第一行在原文中的行号（从 0 开始）
    pub start_line: usize,
    /// 已去除行尾空白，保留行首空白
    pub lines: Vec<&'a str>,
}

impl<'a> RawBlock<'a> {
    pub fn first_line(&self) -> &'a str {
        self.lines[0]
    }

    pub fn is_single_line(&self) -> bool {
        self.lines.len() == 1
    }
}

/// 把原文切成行，兼容 `\r\n`、`\r` 和 `\n` 三种换行
pub fn split_lines(script: &str) -> impl Iterator<Item = &str> {
    script
        .trim_start_matches('\u{feff}')
        .split('\n')
        .flat_map(|line| line.trim_end_matches('\r').split('\r'))
        .map(str::trim_end)
}

/// 把原文按空行分块，空行本身不保留
pub fn split_blocks(script: &str) -> Vec<RawBlock<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<RawBlock> = None;

    for (i, line) in split_lines(script).enumerate() {
        if line.trim().is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }
        current
            .get_or_insert_with(|| RawBlock {
                start_line: i,
                lines: Vec::new(),
            })
            .lines
            .push(line);
    }

    if let Some(block) = current {
        blocks.push(block);
    }
    blocks
}
