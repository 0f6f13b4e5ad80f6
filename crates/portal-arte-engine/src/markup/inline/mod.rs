//! # Inline Resolution
//!
//! Inline content is resolved by a fixed sequence of split passes rather than
//! a single tokenizer. Each pass re-splits only the plain `Text` leaves left by
//! the passes before it, so a resolved span is never reinterpreted.
//!
//! ## Pass Order
//!
//! 1. Links `[label](url)`
//! 2. Bold `**text**`
//! 3. Italic `*text*`
//! 4. Underline `<u>text</u>`
//!
//! The order is a precedence rule: bold must run before italic so `**` pairs
//! are not read as two empty italics, and a link label is never emphasised.
//! Reordering the passes changes the output for crossing tokens.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` and `plain_text`
//! - **`kinds`**: one type per inline token, owning its pattern
//! - **`parser`**: `parse_inline()` and the `InlinePass` sequence

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{InlinePass, parse_inline};
pub use types::{InlineSpan, plain_text};
