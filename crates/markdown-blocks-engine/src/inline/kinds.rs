//! Inline constructs with their owned delimiters.
//!
//! Syntax knowledge for each construct lives here so the tokenizer only
//! deals with precedence, and the markup writer reuses the same delimiters.

use super::types::Annotations;

/// A construct written as `open text open`, e.g. `**text**`.
///
/// `guarded` runs refuse to start right after, or end right before, another
/// copy of their delimiter byte, so `**` never matches inside a `***` run.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedRun {
    pub open: &'static str,
    pub guarded: bool,
    pub annotations: Annotations,
}

impl DelimitedRun {
    pub fn delim(&self) -> u8 {
        self.open.as_bytes()[0]
    }

    pub fn width(&self) -> usize {
        self.open.len()
    }
}

/// Delimited runs in match priority order.
pub const RUNS: [DelimitedRun; 8] = [
    DelimitedRun {
        open: "***",
        guarded: true,
        annotations: Annotations::BOLD_ITALIC,
    },
    DelimitedRun {
        open: "___",
        guarded: true,
        annotations: Annotations::BOLD_ITALIC,
    },
    DelimitedRun {
        open: "**",
        guarded: true,
        annotations: Annotations::BOLD,
    },
    DelimitedRun {
        open: "__",
        guarded: true,
        annotations: Annotations::BOLD,
    },
    DelimitedRun {
        open: "*",
        guarded: true,
        annotations: Annotations::ITALIC,
    },
    DelimitedRun {
        open: "_",
        guarded: true,
        annotations: Annotations::ITALIC,
    },
    DelimitedRun {
        open: CodeSpan::TICK,
        guarded: false,
        annotations: Annotations::CODE,
    },
    DelimitedRun {
        open: Strikethrough::TILDES,
        guarded: true,
        annotations: Annotations::STRIKETHROUGH,
    },
];

/// `` `code` ``: everything between the ticks is literal.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: &'static str = "`";
}

/// `~~text~~`
pub struct Strikethrough;

impl Strikethrough {
    pub const TILDES: &'static str = "~~";
}

/// `[text](href)`
pub struct InlineLink;

impl InlineLink {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: u8 = b')';
}

/// `![alt](url)`
pub struct InlineImage;

impl InlineImage {
    pub const BANG: u8 = b'!';
}

/// Markup used when writing annotations back out.
///
/// Underline is written as `__`, which the tokenizer reads back as bold;
/// the asymmetry is inherent to the markdown dialect.
pub struct Markup;

impl Markup {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
    pub const STRIKETHROUGH: &'static str = Strikethrough::TILDES;
    pub const UNDERLINE: &'static str = "__";
    pub const CODE: &'static str = CodeSpan::TICK;
}
