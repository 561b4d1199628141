pub mod assembler;
pub mod classifier;
pub mod fountain_parser;
pub mod text_processor;
pub mod title_page;

pub use assembler::assemble;
pub use classifier::{classify, ClassifierState, Element};
pub use fountain_parser::{FountainParser, ParseOutput};
pub use text_processor::{split_blocks, RawBlock};
pub use title_page::extract_title_page;
