pub mod inline;
pub mod renderer;

pub use inline::{format_inline, format_lines};
pub use renderer::HtmlRenderer;
