//! # Authored-Text Markup
//!
//! The single translation point from stored authored text into the typed
//! [`DisplayBlock`] / [`InlineSpan`] model. No other module knows about
//! bracket tokens.
//!
//! Rendering is stateless and total: every string renders, one block per
//! input line, and nothing is cached between calls.

pub mod blocks;
pub mod html;
pub mod inline;
pub mod strip;

#[cfg(test)]
mod tests;

use blocks::{LineClass, classify_line};

pub use blocks::{Alignment, DisplayBlock, EmbedProvider};
pub use html::to_html;
pub use inline::{InlineSpan, parse_inline, plain_text};
pub use strip::{card_preview, strip_formatting};

/// Renders authored text into display blocks, one per line, in line order.
pub fn render_document(raw: &str) -> Vec<DisplayBlock> {
    raw.split('\n')
        .map(|line| render_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

/// Renders a single line of authored text.
pub fn render_line(line: &str) -> DisplayBlock {
    match classify_line(line) {
        LineClass::Blank => DisplayBlock::Blank,
        LineClass::Embed { provider, id } => DisplayBlock::VideoEmbed { provider, id },
        LineClass::Heading { level, content } => DisplayBlock::Heading {
            level,
            inline: parse_inline(&content),
        },
        LineClass::ListItem { content } => DisplayBlock::ListItem {
            inline: parse_inline(&content),
        },
        LineClass::Paragraph { content, alignment } => DisplayBlock::Paragraph {
            inline: parse_inline(&content),
            alignment,
        },
    }
}
