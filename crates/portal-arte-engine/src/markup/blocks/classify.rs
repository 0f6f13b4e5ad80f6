use super::kinds::{Alignment, EmbedProvider, HeadingMarker, ListMarker};

/// Result of classifying one line of authored text.
///
/// Block-level tokens are already removed; `content` is the raw text that
/// still needs inline resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Embed {
        provider: EmbedProvider,
        id: String,
    },
    Heading {
        level: u8,
        content: String,
    },
    ListItem {
        content: String,
    },
    Paragraph {
        content: String,
        alignment: Alignment,
    },
}

/// Classifies a single line (without its line terminator).
///
/// Resolution order: blank, embed, alignment wrapper, then the block prefix
/// of the alignment-stripped text (`## `, `# `, `- `). A line left with no
/// content once its wrapper tokens are gone is blank as well.
pub fn classify_line(line: &str) -> LineClass {
    if line.trim().is_empty() {
        return LineClass::Blank;
    }

    if let Some((provider, id)) = EmbedProvider::detect(line) {
        return LineClass::Embed { provider, id };
    }

    let (alignment, text) = Alignment::strip(line);
    if text.trim().is_empty() {
        return LineClass::Blank;
    }

    if let Some((level, rest)) = HeadingMarker::strip(&text) {
        return LineClass::Heading {
            level,
            content: rest.to_string(),
        };
    }

    if let Some(rest) = ListMarker::strip(&text) {
        return LineClass::ListItem {
            content: rest.to_string(),
        };
    }

    LineClass::Paragraph {
        content: text.into_owned(),
        alignment,
    }
}
