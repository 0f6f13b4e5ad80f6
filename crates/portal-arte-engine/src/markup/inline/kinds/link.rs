use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::markup::inline::InlineSpan;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("link regex"));

/// Markdown-style link `[label](url)`.
pub struct MarkdownLink;

impl MarkdownLink {
    pub fn pattern() -> &'static Regex {
        &LINK
    }

    pub fn span(caps: &Captures<'_>) -> InlineSpan {
        InlineSpan::Link {
            label: caps[1].to_string(),
            url: caps[2].to_string(),
        }
    }
}
