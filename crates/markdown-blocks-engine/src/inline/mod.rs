//! # Inline Tokenizing
//!
//! Exclusive-match inline tokenizer over a single line of text, plus its
//! inverse that writes spans back as markup.
//!
//! ## Modules
//!
//! - **`types`**: `RichText` span, `Annotations` flags, `Link`, `Image`
//! - **`kinds`**: Inline constructs with owned delimiters, in priority order
//! - **`cursor`**: `Cursor` for byte-wise scanning with lookbehind
//! - **`parser`**: `tokenize()` main entry point with `try_parse_*` helpers
//! - **`markup`**: `to_markup()` for serialization
//!
//! ## Exclusivity
//!
//! Each matched region becomes exactly one span with one annotation
//! combination. `**[a](b)**` is a bold span whose text is `[a](b)`, never a
//! bold link.

pub mod cursor;
pub mod kinds;
pub mod markup;
pub mod parser;
pub mod types;

pub use markup::{spans_to_markup, to_markup};
pub use parser::tokenize;
pub use types::{Annotations, Image, Link, RichText};
