use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::markup::inline::InlineSpan;

// Non-greedy, may be empty: `****` is an empty bold.
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold regex"));

// At least one non-asterisk character. Delimiters touching another `*` are
// rejected in `captures_at`, so a leftover `**` stays literal.
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("italic regex"));

/// Asterisk emphasis.
pub enum Emphasis {
    Bold,
    Italic,
}

impl Emphasis {
    pub const MARKER: char = '*';

    pub fn pattern(&self) -> &'static Regex {
        match self {
            Emphasis::Bold => &BOLD,
            Emphasis::Italic => &ITALIC,
        }
    }

    /// First match at or after `from`.
    ///
    /// An italic delimiter never borrows an asterisk from a neighbouring
    /// `**`: candidates whose opening `*` follows another `*`, or whose
    /// closing `*` precedes one, are skipped.
    pub fn captures_at<'h>(&self, text: &'h str, from: usize) -> Option<Captures<'h>> {
        let pattern = self.pattern();
        match self {
            Emphasis::Bold => pattern.captures_at(text, from),
            Emphasis::Italic => {
                let bytes = text.as_bytes();
                let mut from = from;
                while let Some(caps) = pattern.captures_at(text, from) {
                    let whole = caps.get(0)?;
                    let after_asterisk = whole.start() > 0 && bytes[whole.start() - 1] == b'*';
                    let before_asterisk = bytes.get(whole.end()) == Some(&b'*');
                    if !after_asterisk && !before_asterisk {
                        return Some(caps);
                    }
                    from = whole.start() + 1;
                }
                None
            }
        }
    }

    pub fn span(&self, caps: &Captures<'_>) -> InlineSpan {
        let children = InlineSpan::children(&caps[1]);
        match self {
            Emphasis::Bold => InlineSpan::Bold(children),
            Emphasis::Italic => InlineSpan::Italic(children),
        }
    }
}
