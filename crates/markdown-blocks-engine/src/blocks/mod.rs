//! # Block Model
//!
//! A document is a flat, ordered `Vec<Block>`. Nesting (quote depth, list
//! indentation) is carried as an integer `level` on each block rather than as
//! a tree; render-time grouping lives in [`crate::outline`].
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockKind`, `ListFormat`
//! - **`id`**: `BlockId`, the identity that survives in-place edits
//!
//! ## Key Invariants
//!
//! - Ids are unique within one parse result
//! - Order in the containing vector is document order
//! - Code blocks store raw text, never rich spans

pub mod id;
pub mod types;

pub use id::BlockId;
pub use types::{Block, BlockKind, ListFormat};
