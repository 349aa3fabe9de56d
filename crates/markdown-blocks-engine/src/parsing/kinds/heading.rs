/// ATX heading syntax: one to six `#`, exactly one space, then text.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Recognises a heading on the trimmed line.
    ///
    /// # Returns
    /// `(level, text)` where `text` has the marker and all whitespace after
    /// it removed, or `None` if the line is not a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let trimmed = line.trim();
        let hashes = trimmed.bytes().take_while(|&b| b == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL {
            return None;
        }

        let rest = &trimmed[hashes..];
        let mut chars = rest.chars();
        if chars.next() != Some(' ') {
            return None;
        }
        match chars.next() {
            Some(c) if !c.is_whitespace() => {}
            _ => return None,
        }

        Some((hashes as u8, rest.trim_start()))
    }
}
