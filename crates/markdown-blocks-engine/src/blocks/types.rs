use serde::{Deserialize, Serialize};

use crate::inline::RichText;

use super::id::BlockId;

/// How a list item is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum ListFormat {
    /// `-`, `*` or `+`
    Unordered,
    /// `N.` with the literal number from the source line
    Ordered { numbering: u64 },
    /// `- [ ]` / `- [x]`
    Task { checked: bool },
}

/// The kind of a block together with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// ATX heading (`#` to `######`)
    Heading { level: u8, rich_text: Vec<RichText> },
    /// `---` or `***`
    HorizontalRule,
    /// One quoted line (or lazily continued run) at a given `>` depth
    Blockquote { level: usize, rich_text: Vec<RichText> },
    /// One list item; `level` is the indentation in two-column steps
    ListItem {
        level: usize,
        #[serde(flatten)]
        format: ListFormat,
        rich_text: Vec<RichText>,
    },
    /// A single physical line of text
    Paragraph { rich_text: Vec<RichText> },
    /// Fenced or indented code; contents are literal
    Code {
        raw_text: String,
        language: Option<String>,
    },
}

impl BlockKind {
    /// The inline spans of this block, if the kind carries any.
    pub fn rich_text(&self) -> Option<&[RichText]> {
        match self {
            BlockKind::Heading { rich_text, .. }
            | BlockKind::Blockquote { rich_text, .. }
            | BlockKind::ListItem { rich_text, .. }
            | BlockKind::Paragraph { rich_text } => Some(rich_text),
            BlockKind::HorizontalRule | BlockKind::Code { .. } => None,
        }
    }

    /// Short lowercase name used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Heading { .. } => "heading",
            BlockKind::HorizontalRule => "horizontal_rule",
            BlockKind::Blockquote { .. } => "blockquote",
            BlockKind::ListItem { .. } => "list_item",
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::Code { .. } => "code",
        }
    }
}

/// A typed unit of document structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    /// Creates a block with a freshly generated id.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: BlockId::new(),
            kind,
        }
    }

    pub fn with_id(id: BlockId, kind: BlockKind) -> Self {
        Self { id, kind }
    }

    pub fn rich_text(&self) -> Option<&[RichText]> {
        self.kind.rich_text()
    }

    /// Concatenated span text, without any markup. Code blocks yield their raw text.
    pub fn plain_text(&self) -> String {
        match &self.kind {
            BlockKind::Code { raw_text, .. } => raw_text.clone(),
            kind => kind
                .rich_text()
                .map(|spans| spans.iter().map(|rt| rt.text.as_str()).collect())
                .unwrap_or_default(),
        }
    }
}
