//! # Rendered Surface
//!
//! A minimal tree standing in for the host's rendered, editable text. The
//! editor renders spans into it, the user edits it, and the edited tree is
//! read back into spans. Caret positions are expressed against its text
//! leaves (see [`crate::caret::locate`]).

use serde::{Deserialize, Serialize};

use crate::inline::{Annotations, RichText};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum RenderNode {
    /// A text leaf; the only node kind that holds caret positions.
    Text { text: String },
    /// Formatting applied to everything below.
    Styled {
        annotations: Annotations,
        children: Vec<RenderNode>,
    },
    Link {
        href: String,
        annotations: Annotations,
        children: Vec<RenderNode>,
    },
    /// An embedded image; contributes no text.
    Image { url: String, alt: String },
    Fragment { children: Vec<RenderNode> },
}

impl RenderNode {
    pub fn text(text: impl Into<String>) -> Self {
        RenderNode::Text { text: text.into() }
    }

    /// Child nodes in document order; leaves have none.
    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Styled { children, .. }
            | RenderNode::Link { children, .. }
            | RenderNode::Fragment { children } => children,
            RenderNode::Text { .. } | RenderNode::Image { .. } => &[],
        }
    }
}

/// Renders spans as a fragment with one child per span.
pub fn render_rich_text(spans: &[RichText]) -> RenderNode {
    RenderNode::Fragment {
        children: spans.iter().map(render_span).collect(),
    }
}

fn render_span(rt: &RichText) -> RenderNode {
    if let Some(image) = &rt.image {
        return RenderNode::Image {
            url: image.url.clone(),
            alt: image.alt.clone(),
        };
    }

    let leaf = RenderNode::text(rt.text.as_str());
    if let Some(link) = &rt.link {
        return RenderNode::Link {
            href: link.href.clone(),
            annotations: rt.annotations,
            children: vec![leaf],
        };
    }
    if rt.annotations.is_empty() {
        leaf
    } else {
        RenderNode::Styled {
            annotations: rt.annotations,
            children: vec![leaf],
        }
    }
}

/// Reads an (edited) rendered tree back into spans.
///
/// Annotations are inherited down the tree. A link becomes one span holding
/// its whole text content. Empty text leaves are dropped.
pub fn rich_text_from_render(root: &RenderNode) -> Vec<RichText> {
    let mut out = vec![];
    collect(root, Annotations::default(), &mut out);
    out
}

fn collect(node: &RenderNode, inherited: Annotations, out: &mut Vec<RichText>) {
    match node {
        RenderNode::Text { text } => {
            if !text.is_empty() {
                out.push(RichText::styled(text.as_str(), inherited));
            }
        }
        RenderNode::Styled {
            annotations,
            children,
        } => {
            let merged = inherited.merge(*annotations);
            for child in children {
                collect(child, merged, out);
            }
        }
        RenderNode::Link {
            href,
            annotations,
            children,
        } => {
            let mut span = RichText::link(children_text(children), href.as_str());
            span.annotations = inherited.merge(*annotations);
            out.push(span);
        }
        RenderNode::Image { url, alt } => {
            let mut span = RichText::image(alt.as_str(), url.as_str());
            span.annotations = inherited;
            out.push(span);
        }
        RenderNode::Fragment { children } => {
            for child in children {
                collect(child, inherited, out);
            }
        }
    }
}

/// Concatenated text of all leaves below `node`.
pub fn text_content(node: &RenderNode) -> String {
    let mut s = String::new();
    push_text(node, &mut s);
    s
}

fn children_text(children: &[RenderNode]) -> String {
    let mut s = String::new();
    for child in children {
        push_text(child, &mut s);
    }
    s
}

fn push_text(node: &RenderNode, s: &mut String) {
    match node {
        RenderNode::Text { text } => s.push_str(text),
        other => {
            for child in other.children() {
                push_text(child, s);
            }
        }
    }
}
