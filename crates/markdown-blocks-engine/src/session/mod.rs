//! # Edit Session
//!
//! Owns one document's block list for the lifetime of an editor and applies
//! block-level edits to it.
//!
//! ## Modules
//!
//! - **`caret_sync`**: `CaretSnapshot`, the snapshot → apply → restore step
//!   around a re-render
//! - **`registry`**: `ActiveBlockRegistry`, which block currently shows its
//!   controls
//!
//! ## Usage Pattern
//!
//! ```rust
//! # use markdown_blocks_engine::{BlockType, ParseOptions, RichText, Session};
//! let mut session = Session::from_markdown("# Title\nbody", &ParseOptions::default());
//! let id = session.blocks()[1].id;
//!
//! // Edits report the re-serialized document
//! let md = session.update_rich_text(id, vec![RichText::plain("new body")]).unwrap();
//! assert_eq!(md, "# Title\n\nnew body");
//!
//! // Converting to the current type is a no-op
//! assert!(session.convert_block(id, BlockType::Heading(2)).unwrap());
//! assert!(!session.convert_block(id, BlockType::Heading(2)).unwrap());
//! ```

pub mod caret_sync;
pub mod registry;

pub use caret_sync::CaretSnapshot;
pub use registry::ActiveBlockRegistry;

use thiserror::Error;

use crate::{
    blocks::{Block, BlockId, BlockKind},
    convert::{BlockType, convert},
    inline::RichText,
    parsing::{ParseOptions, parse_with},
    serialize::{SerializeOptions, serialize_with},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no block with id {0}")]
    BlockNotFound(BlockId),
}

/// Replaces one block's spans, returning a new block list.
///
/// Blocks without rich text are handled by kind: a code block takes the
/// joined span text as its raw text and a rule is left as is. Unknown ids
/// leave the list unchanged.
pub fn update_block_rich_text(blocks: &[Block], id: BlockId, spans: Vec<RichText>) -> Vec<Block> {
    let mut spans = Some(spans);
    blocks
        .iter()
        .map(|block| match spans.take_if(|_| block.id == id) {
            Some(spans) => with_rich_text(block, spans),
            None => block.clone(),
        })
        .collect()
}

fn with_rich_text(block: &Block, spans: Vec<RichText>) -> Block {
    let kind = match &block.kind {
        BlockKind::Heading { level, .. } => BlockKind::Heading {
            level: *level,
            rich_text: spans,
        },
        BlockKind::Blockquote { level, .. } => BlockKind::Blockquote {
            level: *level,
            rich_text: spans,
        },
        BlockKind::ListItem { level, format, .. } => BlockKind::ListItem {
            level: *level,
            format: *format,
            rich_text: spans,
        },
        BlockKind::Paragraph { .. } => BlockKind::Paragraph { rich_text: spans },
        BlockKind::Code { language, .. } => BlockKind::Code {
            raw_text: spans.iter().map(|rt| rt.text.as_str()).collect(),
            language: language.clone(),
        },
        BlockKind::HorizontalRule => BlockKind::HorizontalRule,
    };
    Block::with_id(block.id, kind)
}

/// One open document: its blocks and the policy used to write them back.
#[derive(Debug, Clone, Default)]
pub struct Session {
    blocks: Vec<Block>,
    serialize_options: SerializeOptions,
}

impl Session {
    pub fn from_markdown(markdown: &str, options: &ParseOptions) -> Self {
        Self::from_blocks(parse_with(markdown, options))
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            serialize_options: SerializeOptions::default(),
        }
    }

    #[must_use]
    pub fn with_serialize_options(mut self, options: SerializeOptions) -> Self {
        self.serialize_options = options;
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    fn position(&self, id: BlockId) -> Result<usize, SessionError> {
        self.blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or(SessionError::BlockNotFound(id))
    }

    /// Replaces a block's spans and returns the whole document as markdown.
    pub fn update_rich_text(
        &mut self,
        id: BlockId,
        spans: Vec<RichText>,
    ) -> Result<String, SessionError> {
        let idx = self.position(id)?;
        self.blocks[idx] = with_rich_text(&self.blocks[idx], spans);
        log::debug!("updated rich text of block {id}");
        Ok(self.to_markdown())
    }

    /// Re-types a block in place.
    ///
    /// # Returns
    /// `false` when the block already had the target type and nothing changed.
    pub fn convert_block(&mut self, id: BlockId, target: BlockType) -> Result<bool, SessionError> {
        let idx = self.position(id)?;
        if self.blocks[idx].kind.is_type(target) {
            return Ok(false);
        }
        self.blocks[idx] = convert(&self.blocks[idx], target);
        Ok(true)
    }

    pub fn to_markdown(&self) -> String {
        serialize_with(&self.blocks, &self.serialize_options)
    }
}
