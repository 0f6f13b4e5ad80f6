use html_escape::{encode_double_quoted_attribute, encode_text};

use super::blocks::{Alignment, DisplayBlock};
use super::inline::InlineSpan;

/// Paints display blocks as an HTML fragment.
///
/// All authored text and URLs are escaped. Consecutive list items share one
/// `<ul>`; every other block stands alone.
pub fn to_html(blocks: &[DisplayBlock]) -> String {
    let mut out = String::new();
    let mut in_list = false;

    for block in blocks {
        let is_item = matches!(block, DisplayBlock::ListItem { .. });
        if in_list && !is_item {
            out.push_str("</ul>\n");
        } else if !in_list && is_item {
            out.push_str("<ul>\n");
        }
        in_list = is_item;

        match block {
            DisplayBlock::Heading { level, inline } => {
                out.push_str(&format!("<h{level}>"));
                push_inline(inline, &mut out);
                out.push_str(&format!("</h{level}>\n"));
            }
            DisplayBlock::ListItem { inline } => {
                out.push_str("<li>");
                push_inline(inline, &mut out);
                out.push_str("</li>\n");
            }
            DisplayBlock::Paragraph { inline, alignment } => {
                if *alignment == Alignment::Left {
                    out.push_str("<p>");
                } else {
                    out.push_str(&format!("<p style=\"text-align: {}\">", alignment.css()));
                }
                push_inline(inline, &mut out);
                out.push_str("</p>\n");
            }
            DisplayBlock::VideoEmbed { provider, id } => {
                let src = provider.embed_url(id);
                out.push_str(&format!(
                    "<iframe class=\"embed-{}\" src=\"{}\" allowfullscreen></iframe>\n",
                    provider.tag(),
                    encode_double_quoted_attribute(&src)
                ));
            }
            DisplayBlock::Blank => out.push_str("<br>\n"),
        }
    }

    if in_list {
        out.push_str("</ul>\n");
    }
    out
}

fn push_inline(spans: &[InlineSpan], out: &mut String) {
    for span in spans {
        match span {
            InlineSpan::Text(s) => out.push_str(&encode_text(s)),
            InlineSpan::Bold(children) => wrap("strong", children, out),
            InlineSpan::Italic(children) => wrap("em", children, out),
            InlineSpan::Underline(children) => wrap("u", children, out),
            InlineSpan::Link { label, url } => {
                out.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    encode_double_quoted_attribute(url),
                    encode_text(label)
                ));
            }
        }
    }
}

fn wrap(tag: &str, children: &[InlineSpan], out: &mut String) {
    out.push_str(&format!("<{tag}>"));
    push_inline(children, out);
    out.push_str(&format!("</{tag}>"));
}
