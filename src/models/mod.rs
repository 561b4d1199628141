pub mod block;
pub mod conf;
pub mod diagnostic;
pub mod document;
pub mod screenplay_properties;
pub mod title_page;

pub use block::{Block, CharacterCue, DialoguePart, DualDialogueGroup, SpeakerTurn};
pub use conf::Conf;
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use document::Document;
pub use screenplay_properties::ScreenplayProperties;
pub use title_page::{TitleEntry, TitlePage, TitleValue};
