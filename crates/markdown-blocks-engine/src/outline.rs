//! Render-time grouping of the flat block list into nested structures.
//!
//! The model stays flat; this builds the tree a UI needs for `<ul>`/`<ol>`
//! and nested `<blockquote>` output.

use crate::blocks::{Block, BlockKind, ListFormat};

/// A block with the blocks nested beneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineNode {
    pub block: Block,
    pub children: Vec<OutlineNode>,
}

pub type ListNode = OutlineNode;
pub type QuoteNode = OutlineNode;

#[derive(Debug, Clone, PartialEq)]
pub enum BlockGroup {
    /// Heading, paragraph, code, rule
    Single(Block),
    /// Consecutive list items of one family, nested by level
    ListGroup { ordered: bool, items: Vec<ListNode> },
    /// Consecutive blockquotes, nested by level
    QuoteGroup { items: Vec<QuoteNode> },
}

/// Groups consecutive list items and quotes for rendering.
///
/// Ordered items form one family, bulleted and task items the other; a
/// change of family starts a new group.
pub fn group_blocks(blocks: &[Block]) -> Vec<BlockGroup> {
    let mut groups = vec![];
    let mut i = 0;

    while i < blocks.len() {
        match &blocks[i].kind {
            BlockKind::ListItem { format, .. } => {
                let ordered = is_ordered(format);
                let start = i;
                while i < blocks.len() && list_family(&blocks[i]) == Some(ordered) {
                    i += 1;
                }
                groups.push(BlockGroup::ListGroup {
                    ordered,
                    items: build_nested(&blocks[start..i], |b| match b.kind {
                        BlockKind::ListItem { level, .. } => level,
                        _ => 0,
                    }),
                });
            }
            BlockKind::Blockquote { .. } => {
                let start = i;
                while i < blocks.len() && matches!(blocks[i].kind, BlockKind::Blockquote { .. }) {
                    i += 1;
                }
                groups.push(BlockGroup::QuoteGroup {
                    items: build_nested(&blocks[start..i], |b| match b.kind {
                        BlockKind::Blockquote { level, .. } => level.saturating_sub(1),
                        _ => 0,
                    }),
                });
            }
            _ => {
                groups.push(BlockGroup::Single(blocks[i].clone()));
                i += 1;
            }
        }
    }

    log::debug!("grouped {} blocks into {} groups", blocks.len(), groups.len());
    groups
}

fn is_ordered(format: &ListFormat) -> bool {
    matches!(format, ListFormat::Ordered { .. })
}

/// `Some(ordered)` for list items, `None` otherwise.
fn list_family(block: &Block) -> Option<bool> {
    match &block.kind {
        BlockKind::ListItem { format, .. } => Some(is_ordered(format)),
        _ => None,
    }
}

fn build_nested(blocks: &[Block], depth: impl Fn(&Block) -> usize) -> Vec<OutlineNode> {
    let mut result = vec![];
    for block in blocks {
        let node = OutlineNode {
            block: block.clone(),
            children: vec![],
        };
        insert_at_depth(&mut result, node, depth(block));
    }
    result
}

/// Inserts under the last node at each level; with no parent available the
/// node lands at the shallowest level that has one.
fn insert_at_depth(items: &mut Vec<OutlineNode>, node: OutlineNode, depth: usize) {
    if depth == 0 {
        items.push(node);
    } else if let Some(last) = items.last_mut() {
        insert_at_depth(&mut last.children, node, depth - 1);
    } else {
        items.push(node);
    }
}
