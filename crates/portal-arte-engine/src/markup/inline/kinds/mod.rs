//! # Inline Kinds
//!
//! Each inline token owns its pattern and knows how to turn a match into an
//! [`InlineSpan`](super::InlineSpan). The parser only decides the order.
//!
//! - **`MarkdownLink`**: `[label](url)`
//! - **`Emphasis`**: `**bold**` and `*italic*`
//! - **`Underline`**: `<u>text</u>`

pub mod emphasis;
pub mod link;
pub mod underline;

pub use emphasis::Emphasis;
pub use link::MarkdownLink;
pub use underline::Underline;
