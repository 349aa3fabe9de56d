/// Indented code: lines starting with four spaces or a tab.
pub struct IndentedCode;

impl IndentedCode {
    pub const SPACES: &'static str = "    ";
    pub const TAB: char = '\t';

    pub fn starts(line: &str) -> bool {
        line.starts_with(Self::SPACES) || line.starts_with(Self::TAB)
    }
}
