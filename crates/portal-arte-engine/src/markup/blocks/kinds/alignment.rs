use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a paragraph.
///
/// Alignment wrappers open and close on the same line. The close token is
/// optional: a stray `[center]` still centres its line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Wrapping alignments in the order they are looked for on a line.
    pub const PRECEDENCE: [Alignment; 3] = [Alignment::Center, Alignment::Right, Alignment::Justify];

    /// Every open and close wrapper token, for plain-text stripping.
    pub const ALL_TOKENS: [&'static str; 6] = [
        "[center]",
        "[/center]",
        "[right]",
        "[/right]",
        "[justify]",
        "[/justify]",
    ];

    /// Open and close tokens, `None` for the default left alignment.
    pub fn tokens(self) -> Option<(&'static str, &'static str)> {
        match self {
            Alignment::Left => None,
            Alignment::Center => Some(("[center]", "[/center]")),
            Alignment::Right => Some(("[right]", "[/right]")),
            Alignment::Justify => Some(("[justify]", "[/justify]")),
        }
    }

    /// CSS `text-align` value.
    pub fn css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }

    /// Detects the line's alignment and removes its wrapper tokens.
    ///
    /// Only the first alignment in [`Self::PRECEDENCE`] whose open token
    /// appears is honoured; tokens of other alignments stay in the text.
    pub fn strip(line: &str) -> (Alignment, Cow<'_, str>) {
        for alignment in Self::PRECEDENCE {
            let Some((open, close)) = alignment.tokens() else {
                continue;
            };
            if line.contains(open) {
                let stripped = line.replace(open, "").replace(close, "");
                return (alignment, Cow::Owned(stripped));
            }
        }
        (Alignment::Left, Cow::Borrowed(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_wrapper_is_left_and_borrowed() {
        let (alignment, text) = Alignment::strip("texto simples");
        assert_eq!(alignment, Alignment::Left);
        assert!(matches!(text, Cow::Borrowed("texto simples")));
    }

    #[test]
    fn strips_open_and_close() {
        let (alignment, text) = Alignment::strip("[center]Olá[/center]");
        assert_eq!(alignment, Alignment::Center);
        assert_eq!(text, "Olá");
    }

    #[test]
    fn missing_close_is_tolerated() {
        let (alignment, text) = Alignment::strip("[right]Assinatura");
        assert_eq!(alignment, Alignment::Right);
        assert_eq!(text, "Assinatura");
    }

    #[test]
    fn center_takes_precedence() {
        let (alignment, text) = Alignment::strip("[justify]a[/justify] [center]b[/center]");
        assert_eq!(alignment, Alignment::Center);
        assert_eq!(text, "[justify]a[/justify] b");
    }

    #[test]
    fn close_without_open_is_literal() {
        let (alignment, text) = Alignment::strip("fim[/center]");
        assert_eq!(alignment, Alignment::Left);
        assert_eq!(text, "fim[/center]");
    }
}
