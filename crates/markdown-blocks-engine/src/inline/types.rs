use serde::{Deserialize, Serialize};

/// Independent formatting flags on a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
}

impl Annotations {
    pub const BOLD: Self = Self {
        bold: true,
        italic: false,
        strikethrough: false,
        underline: false,
        code: false,
    };
    pub const ITALIC: Self = Self {
        bold: false,
        italic: true,
        strikethrough: false,
        underline: false,
        code: false,
    };
    pub const BOLD_ITALIC: Self = Self {
        bold: true,
        italic: true,
        strikethrough: false,
        underline: false,
        code: false,
    };
    pub const STRIKETHROUGH: Self = Self {
        bold: false,
        italic: false,
        strikethrough: true,
        underline: false,
        code: false,
    };
    pub const UNDERLINE: Self = Self {
        bold: false,
        italic: false,
        strikethrough: false,
        underline: true,
        code: false,
    };
    pub const CODE: Self = Self {
        bold: false,
        italic: false,
        strikethrough: false,
        underline: false,
        code: true,
    };

    /// True when no flag is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Flag-wise OR, used when formatting is inherited down a rendered tree.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            strikethrough: self.strikethrough || other.strikethrough,
            underline: self.underline || other.underline,
            code: self.code || other.code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    pub alt: String,
    pub url: String,
}

/// A run of text sharing one formatting, link or image state.
///
/// Image spans always have empty `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RichText {
    pub text: String,
    pub annotations: Annotations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl RichText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn styled(text: impl Into<String>, annotations: Annotations) -> Self {
        Self {
            text: text.into(),
            annotations,
            ..Self::default()
        }
    }

    /// A link span; links always carry the underline flag.
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotations: Annotations::UNDERLINE,
            link: Some(Link { href: href.into() }),
            image: None,
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            annotations: Annotations::default(),
            link: None,
            image: Some(Image {
                alt: alt.into(),
                url: url.into(),
            }),
        }
    }

    /// A span is plain iff no flag is set and it is neither a link nor an image.
    pub fn is_plain(&self) -> bool {
        self.annotations.is_empty() && self.link.is_none() && self.image.is_none()
    }
}
