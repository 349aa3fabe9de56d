pub mod blocks;
pub mod caret;
pub mod convert;
pub mod inline;
pub mod io;
pub mod outline;
pub mod parsing;
pub mod render;
pub mod serialize;
pub mod session;

#[cfg(test)]
pub(crate) mod tests;

// Re-export key types for easier usage
pub use blocks::{Block, BlockId, BlockKind, ListFormat};
pub use caret::{TextPosition, caret_delta, locate, remap};
pub use convert::{BlockType, BlockTypeParseError, convert, convert_named};
pub use inline::{Annotations, Image, Link, RichText, to_markup, tokenize};
pub use io::{IoError, read_document, write_document};
pub use outline::{BlockGroup, ListNode, OutlineNode, QuoteNode, group_blocks};
pub use parsing::{ParseOptions, UnterminatedFence, parse, parse_with};
pub use render::{RenderNode, render_rich_text, rich_text_from_render, text_content};
pub use serialize::{SerializeOptions, serialize, serialize_with};
pub use session::{
    ActiveBlockRegistry, CaretSnapshot, Session, SessionError, update_block_rich_text,
};
