use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::markup::inline::InlineSpan;

static UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<u>(.*?)</u>").expect("underline regex"));

/// Literal `<u>…</u>` tags emitted by the admin editor.
pub struct Underline;

impl Underline {
    pub const OPEN: &'static str = "<u>";
    pub const CLOSE: &'static str = "</u>";

    pub fn pattern() -> &'static Regex {
        &UNDERLINE
    }

    pub fn span(caps: &Captures<'_>) -> InlineSpan {
        InlineSpan::Underline(InlineSpan::children(&caps[1]))
    }
}
