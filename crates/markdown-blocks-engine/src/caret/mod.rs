//! # Caret Handling
//!
//! Keeps an editing caret stable when a block's text is re-rendered with
//! different markup.
//!
//! ## Modules
//!
//! - **`delta`**: `caret_delta()` and `remap()` between two text versions
//! - **`locate`**: `locate()` of a char offset within a rendered tree
//!
//! All offsets are counted in `char`s.

pub mod delta;
pub mod locate;

pub use delta::{caret_delta, remap};
pub use locate::{TextPosition, locate};
