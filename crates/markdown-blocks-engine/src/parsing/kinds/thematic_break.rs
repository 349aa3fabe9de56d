/// Horizontal rule: three or more of only `-` or only `*`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.len() < Self::MIN_LEN {
            return false;
        }
        trimmed.bytes().all(|b| b == b'-') || trimmed.bytes().all(|b| b == b'*')
    }
}
