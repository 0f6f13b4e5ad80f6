//! Document-level rendering tests.
//!
//! Unit tests next to each kind cover single tokens; these cover whole
//! documents and the guarantees callers rely on.

use pretty_assertions::assert_eq;

use super::{
    Alignment, DisplayBlock, EmbedProvider, InlineSpan, plain_text, render_document,
    strip_formatting,
};

fn text(s: &str) -> InlineSpan {
    InlineSpan::text(s)
}

#[test]
fn empty_and_whitespace_are_one_blank() {
    assert_eq!(render_document(""), vec![DisplayBlock::Blank]);
    assert_eq!(render_document("   "), vec![DisplayBlock::Blank]);
}

#[test]
fn heading_level_one() {
    let blocks = render_document("# Título");
    assert_eq!(blocks.len(), 1);
    match &blocks[0] {
        DisplayBlock::Heading { level, inline } => {
            assert_eq!(*level, 1);
            assert_eq!(plain_text(inline), "Título");
        }
        other => panic!("expected Heading, got {other:?}"),
    }
}

#[test]
fn list_marker_is_stripped() {
    assert_eq!(
        render_document("- Item um"),
        vec![DisplayBlock::ListItem {
            inline: vec![text("Item um")]
        }]
    );
}

#[test]
fn bold_and_italic_in_order() {
    assert_eq!(
        render_document("**negrito** e *itálico*"),
        vec![DisplayBlock::Paragraph {
            inline: vec![
                InlineSpan::Bold(vec![text("negrito")]),
                text(" e "),
                InlineSpan::Italic(vec![text("itálico")]),
            ],
            alignment: Alignment::Left,
        }]
    );
}

#[test]
fn embed_consumes_its_line() {
    assert_eq!(
        render_document("texto [youtube]abc123[/youtube] mais texto"),
        vec![DisplayBlock::VideoEmbed {
            provider: EmbedProvider::Youtube,
            id: "abc123".into()
        }]
    );
}

#[test]
fn strip_formatting_removes_wrappers_and_emphasis() {
    let once = strip_formatting("[center]Olá **mundo**[/center]");
    assert_eq!(once, "Olá mundo");
    assert_eq!(strip_formatting(&once), once);
}

#[test]
fn link_is_sole_span() {
    assert_eq!(
        render_document("[Saiba mais](https://example.com)"),
        vec![DisplayBlock::Paragraph {
            inline: vec![InlineSpan::Link {
                label: "Saiba mais".into(),
                url: "https://example.com".into()
            }],
            alignment: Alignment::Left,
        }]
    );
}

#[test]
fn one_block_per_line_in_order() {
    let raw = "## A\n\n[spotify]ep1[/spotify]\n- b\n[right]c\n";
    let blocks = render_document(raw);
    assert_eq!(blocks.len(), raw.split('\n').count());
    assert!(matches!(blocks[0], DisplayBlock::Heading { level: 2, .. }));
    assert!(blocks[1].is_blank());
    assert!(matches!(
        blocks[2],
        DisplayBlock::VideoEmbed {
            provider: EmbedProvider::Spotify,
            ..
        }
    ));
    assert!(matches!(blocks[3], DisplayBlock::ListItem { .. }));
    assert!(matches!(
        blocks[4],
        DisplayBlock::Paragraph {
            alignment: Alignment::Right,
            ..
        }
    ));
    assert!(blocks[5].is_blank());
}

#[test]
fn carriage_returns_are_dropped() {
    assert_eq!(
        render_document("um\r\ndois"),
        vec![
            DisplayBlock::Paragraph {
                inline: vec![text("um")],
                alignment: Alignment::Left
            },
            DisplayBlock::Paragraph {
                inline: vec![text("dois")],
                alignment: Alignment::Left
            },
        ]
    );
}

#[test]
fn no_state_crosses_lines() {
    let blocks = render_document("[center]abre\n**fecha**[/center] e **abre\nfecha**");
    assert_eq!(
        blocks,
        vec![
            DisplayBlock::Paragraph {
                inline: vec![text("abre")],
                alignment: Alignment::Center
            },
            DisplayBlock::Paragraph {
                inline: vec![
                    InlineSpan::Bold(vec![text("fecha")]),
                    text("[/center] e **abre"),
                ],
                alignment: Alignment::Left
            },
            DisplayBlock::Paragraph {
                inline: vec![text("fecha**")],
                alignment: Alignment::Left
            },
        ]
    );
}

#[test]
fn malformed_tokens_degrade_to_text() {
    let inputs = [
        "[youtube]sem fim",
        "[center",
        "<u>aberto",
        "[rótulo](",
        "*",
        "**",
        "***",
        "#",
        "-",
        "[/spotify]x[spotify]",
        "[[[]]]((()))",
        "</u>fim<u>",
    ];
    for input in inputs {
        let blocks = render_document(input);
        assert_eq!(blocks.len(), 1, "input {input:?}");
        assert_eq!(
            plain_text(blocks[0].inline()),
            input,
            "input {input:?} should render literally"
        );
    }
}

#[test]
fn rendering_is_deterministic() {
    let raw = "**bold *italic** text*\n<u>*x*</u>";
    assert_eq!(render_document(raw), render_document(raw));
}

#[test]
fn lesson_page_snapshot() {
    let raw = "# Oficina de Arte\n[center]Traga **tinta** e *pincel*[/center]\n- Papel <u>A3</u>\n\n[youtube]abc123[/youtube]";
    insta::assert_debug_snapshot!(render_document(raw), @r#"
    [
        Heading {
            level: 1,
            inline: [
                Text(
                    "Oficina de Arte",
                ),
            ],
        },
        Paragraph {
            inline: [
                Text(
                    "Traga ",
                ),
                Bold(
                    [
                        Text(
                            "tinta",
                        ),
                    ],
                ),
                Text(
                    " e ",
                ),
                Italic(
                    [
                        Text(
                            "pincel",
                        ),
                    ],
                ),
            ],
            alignment: Center,
        },
        ListItem {
            inline: [
                Text(
                    "Papel ",
                ),
                Underline(
                    [
                        Text(
                            "A3",
                        ),
                    ],
                ),
            ],
        },
        Blank,
        VideoEmbed {
            provider: Youtube,
            id: "abc123",
        },
    ]
    "#);
}
