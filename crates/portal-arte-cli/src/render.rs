use portal_arte_engine::{Alignment, DisplayBlock, InlineSpan};
use ratatui::{
    layout,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Paints display blocks as terminal lines, one line per block.
pub fn block_lines(blocks: &[DisplayBlock]) -> Vec<Line<'static>> {
    blocks.iter().map(block_line).collect()
}

fn block_line(block: &DisplayBlock) -> Line<'static> {
    match block {
        DisplayBlock::Heading { level, inline } => {
            let style = match level {
                1 => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                _ => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            };
            Line::from(inline_spans(inline, style))
        }
        DisplayBlock::ListItem { inline } => {
            let mut spans = vec![Span::raw("• ")];
            spans.extend(inline_spans(inline, Style::default()));
            Line::from(spans)
        }
        DisplayBlock::Paragraph { inline, alignment } => {
            Line::from(inline_spans(inline, Style::default())).alignment(terminal_alignment(*alignment))
        }
        DisplayBlock::VideoEmbed { provider, id } => Line::from(vec![
            Span::styled(
                format!("▶ {} ", provider.tag()),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
            Span::styled(provider.embed_url(id), Style::default().fg(Color::DarkGray)),
        ]),
        DisplayBlock::Blank => Line::default(),
    }
}

// Terminals cannot justify; justified text is painted left-aligned.
fn terminal_alignment(alignment: Alignment) -> layout::Alignment {
    match alignment {
        Alignment::Left | Alignment::Justify => layout::Alignment::Left,
        Alignment::Center => layout::Alignment::Center,
        Alignment::Right => layout::Alignment::Right,
    }
}

fn inline_spans(spans: &[InlineSpan], base: Style) -> Vec<Span<'static>> {
    let mut out = Vec::new();
    push_spans(spans, base, &mut out);
    out
}

fn push_spans(spans: &[InlineSpan], style: Style, out: &mut Vec<Span<'static>>) {
    for span in spans {
        match span {
            InlineSpan::Text(s) => out.push(Span::styled(s.clone(), style)),
            InlineSpan::Bold(children) => {
                push_spans(children, style.add_modifier(Modifier::BOLD), out)
            }
            InlineSpan::Italic(children) => {
                push_spans(children, style.add_modifier(Modifier::ITALIC), out)
            }
            InlineSpan::Underline(children) => {
                push_spans(children, style.add_modifier(Modifier::UNDERLINED), out)
            }
            InlineSpan::Link { label, url } => {
                out.push(Span::styled(
                    label.clone(),
                    style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                ));
                out.push(Span::styled(
                    format!(" <{url}>"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }
}
