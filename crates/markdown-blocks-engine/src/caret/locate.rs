use serde::{Deserialize, Serialize};

use crate::render::RenderNode;

/// A caret position inside one text leaf of a rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPosition {
    /// Child indices from the root down to the leaf.
    pub path: Vec<usize>,
    /// Char offset within the leaf.
    pub offset: usize,
}

/// Finds the text leaf holding the char `offset` of the tree's text.
///
/// Leaves are visited depth-first. An offset equal to a leaf's end belongs
/// to that leaf rather than the next one. `None` when the offset is past the
/// total text length.
pub fn locate(root: &RenderNode, offset: usize) -> Option<TextPosition> {
    let mut seen = 0;
    let mut path = vec![];
    walk(root, offset, &mut seen, &mut path)
}

fn walk(
    node: &RenderNode,
    offset: usize,
    seen: &mut usize,
    path: &mut Vec<usize>,
) -> Option<TextPosition> {
    if let RenderNode::Text { text } = node {
        let len = text.chars().count();
        if offset >= *seen && offset <= *seen + len {
            return Some(TextPosition {
                path: path.clone(),
                offset: offset - *seen,
            });
        }
        *seen += len;
        return None;
    }

    for (i, child) in node.children().iter().enumerate() {
        path.push(i);
        let found = walk(child, offset, seen, path);
        path.pop();
        if found.is_some() {
            return found;
        }
    }
    None
}
