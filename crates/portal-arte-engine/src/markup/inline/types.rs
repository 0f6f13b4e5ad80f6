use serde::Serialize;

/// A styled or plain fragment of text within a block.
///
/// Styled spans hold the captured text as a single `Text` child, or no child
/// at all when the capture was empty (`****` is an empty `Bold`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineSpan {
    Text(String),
    Bold(Vec<InlineSpan>),
    Italic(Vec<InlineSpan>),
    Underline(Vec<InlineSpan>),
    Link { label: String, url: String },
}

impl InlineSpan {
    pub fn text(s: impl Into<String>) -> Self {
        InlineSpan::Text(s.into())
    }

    /// Wraps captured text as the children of a styled span.
    pub(crate) fn children(captured: &str) -> Vec<InlineSpan> {
        if captured.is_empty() {
            Vec::new()
        } else {
            vec![InlineSpan::text(captured)]
        }
    }
}

/// Visible text of a span sequence with all styling removed.
///
/// Links contribute their label.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    let mut out = String::new();
    push_plain(spans, &mut out);
    out
}

fn push_plain(spans: &[InlineSpan], out: &mut String) {
    for span in spans {
        match span {
            InlineSpan::Text(s) => out.push_str(s),
            InlineSpan::Link { label, .. } => out.push_str(label),
            InlineSpan::Bold(children)
            | InlineSpan::Italic(children)
            | InlineSpan::Underline(children) => push_plain(children, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_flattens_styles() {
        let spans = vec![
            InlineSpan::Bold(vec![InlineSpan::text("negrito")]),
            InlineSpan::text(" e "),
            InlineSpan::Link {
                label: "link".into(),
                url: "https://example.com".into(),
            },
        ];
        assert_eq!(plain_text(&spans), "negrito e link");
    }

    #[test]
    fn empty_capture_has_no_children() {
        assert!(InlineSpan::children("").is_empty());
        assert_eq!(InlineSpan::children("x"), vec![InlineSpan::text("x")]);
    }
}
