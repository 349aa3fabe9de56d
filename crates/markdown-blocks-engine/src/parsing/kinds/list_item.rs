use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::ListFormat;

/// One captured list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemLine<'a> {
    /// Leading whitespace width with tabs counted as four columns.
    pub indent: usize,
    pub format: ListFormat,
    /// Text after the marker and checkbox.
    pub text: &'a str,
}

impl ListItemLine<'_> {
    /// Nesting level: one level per two columns of indentation.
    pub fn level(&self) -> usize {
        self.indent / ListItemSyntax::COLUMNS_PER_LEVEL
    }
}

pub struct ListItemSyntax;

impl ListItemSyntax {
    pub const TAB_WIDTH: usize = 4;
    pub const COLUMNS_PER_LEVEL: usize = 2;

    fn member_regex() -> &'static Regex {
        static MEMBER_REGEX: OnceLock<Regex> = OnceLock::new();
        MEMBER_REGEX.get_or_init(|| {
            Regex::new(r"^\s*(?:[-*+]|[0-9]+\.)\s*(?:\[ ?[xX]?\])?(?:\s+.*)?$")
                .expect("Invalid list member regex")
        })
    }

    fn capture_regex() -> &'static Regex {
        static CAPTURE_REGEX: OnceLock<Regex> = OnceLock::new();
        CAPTURE_REGEX.get_or_init(|| {
            Regex::new(r"^(\s*)([-*+]|[0-9]+\.)\s*(?:\[ ?([xX]?)\]\s*)?(.*)$")
                .expect("Invalid list capture regex")
        })
    }

    /// Whether a line belongs to a list run.
    ///
    /// Requires whitespace (or end of line) after the marker, so `*emphasis*`
    /// and `-dash` stay paragraphs.
    pub fn is_member(line: &str) -> bool {
        Self::member_regex().is_match(line)
    }

    /// Captures indentation, marker, checkbox and text from a list line.
    pub fn capture(line: &str) -> Option<ListItemLine<'_>> {
        let caps = Self::capture_regex().captures(line)?;
        let indent = caps.get(1)?.as_str();
        let marker = caps.get(2)?.as_str();
        let text = caps.get(4).map_or("", |m| m.as_str());

        let format = if let Some(digits) = marker.strip_suffix('.') {
            let numbering = digits.parse::<u64>().unwrap_or_else(|_| {
                log::warn!("list number {digits} out of range, saturating");
                u64::MAX
            });
            ListFormat::Ordered { numbering }
        } else if let Some(check) = caps.get(3) {
            ListFormat::Task {
                checked: check.as_str().eq_ignore_ascii_case("x"),
            }
        } else {
            ListFormat::Unordered
        };

        Some(ListItemLine {
            indent: Self::expanded_width(indent),
            format,
            text,
        })
    }

    fn expanded_width(indent: &str) -> usize {
        indent
            .chars()
            .map(|c| if c == '\t' { Self::TAB_WIDTH } else { 1 })
            .sum()
    }
}
