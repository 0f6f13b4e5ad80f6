//! # Block Kinds
//!
//! Line-level constructs that own their syntax delimiters. The classifier
//! asks these types whether a line matches; it never hardcodes `[center]`,
//! `# ` or `[youtube]` itself.
//!
//! ## Types
//!
//! - **`EmbedProvider`**: `[youtube]ID[/youtube]`, `[spotify]ID[/spotify]`
//! - **`Alignment`**: `[center]`, `[right]`, `[justify]` wrappers
//! - **`HeadingMarker`**: `# ` and `## ` prefixes
//! - **`ListMarker`**: `- ` prefix

pub mod alignment;
pub mod embed;
pub mod heading;
pub mod list_item;

pub use alignment::Alignment;
pub use embed::EmbedProvider;
pub use heading::HeadingMarker;
pub use list_item::ListMarker;
