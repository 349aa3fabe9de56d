/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// lexer code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether the line opens or continues a quote run.
    pub fn starts(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips the leading `(>\s*)+` prefix from a line, returning (level, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    ///
    /// # Returns
    /// - `level`: Number of `>` markers in the prefix (0 if not a blockquote)
    /// - `byte_offset`: Index into `s` where content begins after the prefix
    pub fn strip_prefixes(s: &str) -> (usize, usize) {
        let mut rest = s;
        let mut level = 0usize;

        while let Some(after) = rest.strip_prefix(Self::PREFIX) {
            level += 1;
            rest = after.trim_start();
        }
        (level, s.len() - rest.len())
    }

    /// A line made of quote markers and whitespace only.
    pub fn is_bare(line: &str) -> bool {
        let trimmed = line.trim_start();
        let (level, offset) = Self::strip_prefixes(trimmed);
        level > 0 && offset == trimmed.len()
    }

    /// A line containing a marker and at least one character that is
    /// neither whitespace nor a marker.
    pub fn has_text(line: &str) -> bool {
        line.contains(Self::PREFIX)
            && line
                .chars()
                .any(|c| !c.is_whitespace() && c != Self::PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefixes("hello"), (0, 0));
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> hello"), (1, 2));
    }

    #[test]
    fn strip_double_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> > hello"), (2, 4));
    }

    #[test]
    fn strip_nested_quote_no_space() {
        assert_eq!(BlockQuote::strip_prefixes(">> hello"), (2, 3));
    }

    #[test]
    fn strip_swallows_all_whitespace_between_markers() {
        assert_eq!(BlockQuote::strip_prefixes(">  \t> x"), (2, 6));
    }

    #[test]
    fn bare_marker_lines() {
        assert!(BlockQuote::is_bare(">"));
        assert!(BlockQuote::is_bare(">>  "));
        assert!(BlockQuote::is_bare(" > > "));
        assert!(!BlockQuote::is_bare("> x"));
        assert!(!BlockQuote::is_bare(""));
    }

    #[test]
    fn text_detection() {
        assert!(BlockQuote::has_text("> x"));
        assert!(!BlockQuote::has_text("> >"));
        assert!(!BlockQuote::has_text("plain"));
    }
}
