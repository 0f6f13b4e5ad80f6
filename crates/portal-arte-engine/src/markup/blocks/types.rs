use serde::Serialize;

use super::kinds::{Alignment, EmbedProvider};
use crate::markup::inline::InlineSpan;

/// One renderable unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayBlock {
    /// `# ` (level 1) or `## ` (level 2) line.
    Heading { level: u8, inline: Vec<InlineSpan> },
    /// `- ` line, marker removed.
    ListItem { inline: Vec<InlineSpan> },
    /// Any other line with content.
    Paragraph {
        inline: Vec<InlineSpan>,
        alignment: Alignment,
    },
    /// A line holding an embed token. Other text on the line is dropped.
    VideoEmbed { provider: EmbedProvider, id: String },
    /// Whitespace-only line, painted as vertical spacing.
    Blank,
}

impl DisplayBlock {
    /// Inline content of text-bearing blocks, empty for embeds and blanks.
    pub fn inline(&self) -> &[InlineSpan] {
        match self {
            DisplayBlock::Heading { inline, .. }
            | DisplayBlock::ListItem { inline }
            | DisplayBlock::Paragraph { inline, .. } => inline,
            DisplayBlock::VideoEmbed { .. } | DisplayBlock::Blank => &[],
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, DisplayBlock::Blank)
    }
}
