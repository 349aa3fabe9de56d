#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn token(self) -> &'static str {
        match self {
            FenceKind::Backticks => CodeFence::BACKTICKS,
            FenceKind::Tildes => CodeFence::TILDES,
        }
    }
}

/// An opening fence line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen<'a> {
    pub kind: FenceKind,
    /// Text after the fence token, trimmed; `None` when empty.
    pub language: Option<&'a str>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    pub fn open(line: &str) -> Option<FenceOpen<'_>> {
        let kind = Self::sig(line)?;
        let language = line[kind.token().len()..].trim();
        Some(FenceOpen {
            kind,
            language: (!language.is_empty()).then_some(language),
        })
    }

    pub fn sig(line: &str) -> Option<FenceKind> {
        if line.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if line.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    /// A line closes the fence when it starts with the same token.
    pub fn closes(kind: FenceKind, line: &str) -> bool {
        Self::sig(line) == Some(kind)
    }
}
