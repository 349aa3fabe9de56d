//! Block syntax recognisers.
//!
//! All knowledge of a block kind's markers lives in its own type here;
//! the lexer only decides precedence and how many lines each kind consumes.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod indented_code;
pub mod list_item;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceOpen};
pub use heading::Heading;
pub use indented_code::IndentedCode;
pub use list_item::{ListItemLine, ListItemSyntax};
pub use thematic_break::ThematicBreak;
