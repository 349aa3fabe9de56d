use crate::{
    caret::{TextPosition, locate, remap},
    render::{RenderNode, text_content},
};

/// The caret and the text it was measured against, taken before a
/// re-render.
///
/// Restoring against the re-rendered tree remaps the offset when the text
/// changed and locates the leaf to put the caret in. Moving the host's
/// cursor there is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaretSnapshot {
    pub offset: usize,
    pub text: String,
}

impl CaretSnapshot {
    pub fn capture(root: &RenderNode, offset: usize) -> Self {
        Self {
            offset,
            text: text_content(root),
        }
    }

    pub fn restore(&self, new_root: &RenderNode) -> Option<TextPosition> {
        let current = text_content(new_root);
        let offset = if current != self.text && !current.is_empty() && !self.text.is_empty() {
            remap(&self.text, &current, self.offset)
        } else {
            self.offset
        };
        locate(new_root, offset)
    }
}
