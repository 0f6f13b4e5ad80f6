use regex::Captures;

use super::{
    kinds::{Emphasis, MarkdownLink, Underline},
    types::InlineSpan,
};

/// One split pass over the `Text` leaves of a span list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlinePass {
    Link,
    Bold,
    Italic,
    Underline,
}

impl InlinePass {
    /// The order passes run in. Changing it changes output for crossing tokens.
    pub const ORDER: [InlinePass; 4] = [
        InlinePass::Link,
        InlinePass::Bold,
        InlinePass::Italic,
        InlinePass::Underline,
    ];

    fn captures_at<'h>(self, text: &'h str, from: usize) -> Option<Captures<'h>> {
        match self {
            InlinePass::Link => MarkdownLink::pattern().captures_at(text, from),
            InlinePass::Bold => Emphasis::Bold.captures_at(text, from),
            InlinePass::Italic => Emphasis::Italic.captures_at(text, from),
            InlinePass::Underline => Underline::pattern().captures_at(text, from),
        }
    }

    fn span(self, caps: &Captures<'_>) -> InlineSpan {
        match self {
            InlinePass::Link => MarkdownLink::span(caps),
            InlinePass::Bold => Emphasis::Bold.span(caps),
            InlinePass::Italic => Emphasis::Italic.span(caps),
            InlinePass::Underline => Underline::span(caps),
        }
    }

    /// Applies this pass, leaving already-typed spans untouched.
    pub fn apply(self, spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
        let mut out = Vec::with_capacity(spans.len());
        for span in spans {
            match span {
                InlineSpan::Text(text) => self.split_text(&text, &mut out),
                typed => out.push(typed),
            }
        }
        out
    }

    fn split_text(self, text: &str, out: &mut Vec<InlineSpan>) {
        let mut last = 0;
        while let Some(caps) = self.captures_at(text, last) {
            let Some(whole) = caps.get(0) else {
                break;
            };
            push_text(out, &text[last..whole.start()]);
            out.push(self.span(&caps));
            last = whole.end();
        }
        push_text(out, &text[last..]);
    }
}

// Empty fragments between adjacent tokens carry nothing to display.
fn push_text(out: &mut Vec<InlineSpan>, fragment: &str) {
    if !fragment.is_empty() {
        out.push(InlineSpan::text(fragment));
    }
}

/// Resolves the inline tokens of one block's text.
///
/// Never fails: text that no pass recognises comes back as `Text`, including
/// unterminated tokens. Empty input yields no spans.
pub fn parse_inline(s: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    push_text(&mut spans, s);
    InlinePass::ORDER
        .into_iter()
        .fold(spans, |spans, pass| pass.apply(spans))
}
