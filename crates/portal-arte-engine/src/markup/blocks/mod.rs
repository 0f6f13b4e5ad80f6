//! # Block Rendering
//!
//! Authored text is rendered one line at a time. There is no cross-line
//! state: every wrapper, embed or emphasis token must open and close on the
//! line it belongs to.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): a line becomes a [`LineClass`]
//!    with its block kind decided and its block-level tokens removed.
//! 2. **Inline Resolution**: the remaining text of heading, list and
//!    paragraph lines is handed to [`crate::markup::inline::parse_inline`].
//!
//! ## Modules
//!
//! - **`types`**: `DisplayBlock`, the renderer's output unit
//! - **`kinds`**: block-level token types with owned delimiters
//! - **`classify`**: `classify_line` and the resolution order

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::{LineClass, classify_line};
pub use kinds::{Alignment, EmbedProvider};
pub use types::DisplayBlock;
