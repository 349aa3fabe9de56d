//! Shared helpers for unit tests.

use crate::blocks::{Block, BlockKind};
use crate::inline::{Annotations, RichText};

pub(crate) fn plain(text: &str) -> RichText {
    RichText::plain(text)
}

pub(crate) fn bold(text: &str) -> RichText {
    RichText::styled(text, Annotations::BOLD)
}

pub(crate) fn italic(text: &str) -> RichText {
    RichText::styled(text, Annotations::ITALIC)
}

pub(crate) fn bold_italic(text: &str) -> RichText {
    RichText::styled(text, Annotations::BOLD_ITALIC)
}

pub(crate) fn strike(text: &str) -> RichText {
    RichText::styled(text, Annotations::STRIKETHROUGH)
}

pub(crate) fn code(text: &str) -> RichText {
    RichText::styled(text, Annotations::CODE)
}

pub(crate) fn paragraph(text: &str) -> Block {
    Block::new(BlockKind::Paragraph {
        rich_text: vec![plain(text)],
    })
}

/// Span texts of a block, for terse assertions.
pub(crate) fn texts(block: &Block) -> Vec<&str> {
    block
        .rich_text()
        .unwrap_or_default()
        .iter()
        .map(|rt| rt.text.as_str())
        .collect()
}
