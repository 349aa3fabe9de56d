//! Block sequence back to markdown text.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::{
    blocks::{Block, BlockKind, ListFormat},
    inline::spans_to_markup,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Write the info string after the opening code fence.
    pub emit_code_language: bool,
}

/// Serializes with default options.
pub fn serialize(blocks: &[Block]) -> String {
    serialize_with(blocks, &SerializeOptions::default())
}

/// Writes blocks as markdown.
///
/// Standalone blocks are followed by a blank line, list items by a single
/// newline so consecutive items stay one list. Trailing whitespace of the
/// whole output is trimmed.
pub fn serialize_with(blocks: &[Block], options: &SerializeOptions) -> String {
    let mut out = String::new();
    for block in blocks {
        write_block(&mut out, block, options);
    }
    out.truncate(out.trim_end().len());
    out
}

fn write_block(out: &mut String, block: &Block, options: &SerializeOptions) {
    // Writing into a String cannot fail
    let _ = match &block.kind {
        BlockKind::Heading { level, rich_text } => writeln!(
            out,
            "{} {}\n",
            "#".repeat(usize::from(*level)),
            spans_to_markup(rich_text)
        ),
        BlockKind::Paragraph { rich_text } => writeln!(out, "{}\n", spans_to_markup(rich_text)),
        BlockKind::ListItem {
            level,
            format,
            rich_text,
        } => writeln!(
            out,
            "{}{}{}",
            "  ".repeat(*level),
            list_prefix(format),
            spans_to_markup(rich_text)
        ),
        BlockKind::Blockquote { level, rich_text } => writeln!(
            out,
            "{}{}\n",
            "> ".repeat(*level),
            spans_to_markup(rich_text)
        ),
        BlockKind::Code { raw_text, language } => {
            let info = match language {
                Some(lang) if options.emit_code_language => lang.as_str(),
                _ => "",
            };
            writeln!(out, "```{info}\n{raw_text}\n```\n")
        }
        BlockKind::HorizontalRule => writeln!(out, "---\n"),
    };
}

fn list_prefix(format: &ListFormat) -> String {
    match format {
        ListFormat::Unordered => "- ".to_string(),
        ListFormat::Ordered { numbering } => format!("{numbering}. "),
        ListFormat::Task { checked: true } => "[x] ".to_string(),
        ListFormat::Task { checked: false } => "[ ] ".to_string(),
    }
}
