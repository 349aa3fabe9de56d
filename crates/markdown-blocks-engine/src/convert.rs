//! Block-type conversion keeping identity and content.

use std::{fmt, str::FromStr};

use crate::{
    blocks::{Block, BlockKind, ListFormat},
    inline::RichText,
};

/// Conversion targets, named as the editor's block-type menu names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading(u8),
    HorizontalRule,
    Blockquote,
    ListItemBulleted,
    ListItemNumbered,
    ListItemTask,
    Code,
}

impl BlockType {
    pub const ALL: [BlockType; 13] = [
        BlockType::Paragraph,
        BlockType::Heading(1),
        BlockType::Heading(2),
        BlockType::Heading(3),
        BlockType::Heading(4),
        BlockType::Heading(5),
        BlockType::Heading(6),
        BlockType::HorizontalRule,
        BlockType::Blockquote,
        BlockType::ListItemBulleted,
        BlockType::ListItemNumbered,
        BlockType::ListItemTask,
        BlockType::Code,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block type: {0}")]
pub struct BlockTypeParseError(pub String);

impl FromStr for BlockType {
    type Err = BlockTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s {
            "paragraph" => BlockType::Paragraph,
            "horizontal_rule" => BlockType::HorizontalRule,
            "blockquote" => BlockType::Blockquote,
            "listItemBulleted" => BlockType::ListItemBulleted,
            "listItemNumbered" => BlockType::ListItemNumbered,
            "listItemTask" => BlockType::ListItemTask,
            "code" => BlockType::Code,
            other => match other.strip_prefix("heading").map(str::as_bytes) {
                Some(&[digit @ b'1'..=b'6']) => BlockType::Heading(digit - b'0'),
                _ => return Err(BlockTypeParseError(s.to_string())),
            },
        };
        Ok(ty)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Paragraph => f.write_str("paragraph"),
            BlockType::Heading(level) => write!(f, "heading{level}"),
            BlockType::HorizontalRule => f.write_str("horizontal_rule"),
            BlockType::Blockquote => f.write_str("blockquote"),
            BlockType::ListItemBulleted => f.write_str("listItemBulleted"),
            BlockType::ListItemNumbered => f.write_str("listItemNumbered"),
            BlockType::ListItemTask => f.write_str("listItemTask"),
            BlockType::Code => f.write_str("code"),
        }
    }
}

impl BlockKind {
    /// Whether converting to `target` would leave the kind unchanged.
    pub fn is_type(&self, target: BlockType) -> bool {
        match (self, target) {
            (BlockKind::Paragraph { .. }, BlockType::Paragraph)
            | (BlockKind::HorizontalRule, BlockType::HorizontalRule)
            | (BlockKind::Blockquote { .. }, BlockType::Blockquote)
            | (BlockKind::Code { .. }, BlockType::Code) => true,
            (BlockKind::Heading { level, .. }, BlockType::Heading(t)) => *level == t,
            (BlockKind::ListItem { format, .. }, target) => matches!(
                (format, target),
                (ListFormat::Unordered, BlockType::ListItemBulleted)
                    | (ListFormat::Ordered { .. }, BlockType::ListItemNumbered)
                    | (ListFormat::Task { .. }, BlockType::ListItemTask)
            ),
            _ => false,
        }
    }
}

/// Re-types a block, keeping its id and text content.
///
/// Rich text carries over unchanged between text kinds. A code block
/// contributes one plain span holding its raw text (none when empty);
/// converting to code joins the span texts. New list items sit at level 1.
pub fn convert(block: &Block, target: BlockType) -> Block {
    let rich_text = carried_rich_text(&block.kind);
    let kind = match target {
        BlockType::Paragraph => BlockKind::Paragraph { rich_text },
        BlockType::Heading(level) => BlockKind::Heading {
            level: level.clamp(1, 6),
            rich_text,
        },
        BlockType::HorizontalRule => BlockKind::HorizontalRule,
        BlockType::Blockquote => BlockKind::Blockquote {
            level: 1,
            rich_text,
        },
        BlockType::ListItemBulleted => list_item(ListFormat::Unordered, rich_text),
        BlockType::ListItemNumbered => list_item(ListFormat::Ordered { numbering: 1 }, rich_text),
        BlockType::ListItemTask => list_item(ListFormat::Task { checked: false }, rich_text),
        BlockType::Code => BlockKind::Code {
            raw_text: block.plain_text(),
            language: None,
        },
    };

    log::debug!("converted block {} from {} to {target}", block.id, block.kind.name());
    Block::with_id(block.id, kind)
}

/// Converts by target name; `None` when the name is not a known block type.
pub fn convert_named(block: &Block, target: &str) -> Option<Block> {
    match target.parse::<BlockType>() {
        Ok(ty) => Some(convert(block, ty)),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}

fn list_item(format: ListFormat, rich_text: Vec<RichText>) -> BlockKind {
    BlockKind::ListItem {
        level: 1,
        format,
        rich_text,
    }
}

fn carried_rich_text(kind: &BlockKind) -> Vec<RichText> {
    match kind {
        BlockKind::Code { raw_text, .. } if raw_text.is_empty() => vec![],
        BlockKind::Code { raw_text, .. } => vec![RichText::plain(raw_text.as_str())],
        other => other.rich_text().map(<[RichText]>::to_vec).unwrap_or_default(),
    }
}
