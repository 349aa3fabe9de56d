//! # Block Parsing
//!
//! Line-oriented scanner that turns a markdown document into a flat
//! `Vec<Block>`.
//!
//! ## Modules
//!
//! - **`kinds`**: One recogniser per block kind, each owning its delimiters
//! - **`lexer`**: `BlockLexer`, which applies the kinds in precedence order
//!
//! Parsing is infallible: any line that matches nothing else is a paragraph.

pub mod kinds;
pub mod lexer;

use serde::{Deserialize, Serialize};

use crate::blocks::Block;
use lexer::BlockLexer;

/// What to do with a code fence that is never closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnterminatedFence {
    /// The fence swallows the rest of the document.
    #[default]
    ConsumeToEnd,
    /// The fence line becomes a paragraph and parsing resumes on the next line.
    Reparse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub unterminated_fence: UnterminatedFence,
}

/// Parses with default options.
pub fn parse(document: &str) -> Vec<Block> {
    parse_with(document, &ParseOptions::default())
}

pub fn parse_with(document: &str, options: &ParseOptions) -> Vec<Block> {
    let blocks = BlockLexer::new(document, options).run();
    log::debug!(
        "parsed {} bytes into {} blocks",
        document.len(),
        blocks.len()
    );
    blocks
}

#[cfg(test)]
mod tests;
