use std::sync::LazyLock;

use regex::Regex;

use super::blocks::kinds::Alignment;
use super::inline::kinds::{Emphasis, Underline};

static WRAPPER_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = Alignment::ALL_TOKENS
        .iter()
        .chain([Underline::OPEN, Underline::CLOSE].iter())
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternatives).expect("wrapper tag regex")
});

static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#{1,2}[ \t]+").expect("heading marker regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Plain-text rendering of authored text for cards and list summaries.
///
/// Removes alignment wrappers, underline tags, emphasis asterisks and heading
/// markers, collapses whitespace (newlines included) to single spaces and
/// trims. Removing a token can expose another one (`[cen[center]ter]`), so
/// the removal repeats until the text stops changing; the result is a fixed
/// point and stripping it again returns it unchanged.
pub fn strip_formatting(raw: &str) -> String {
    let mut current = strip_once(raw);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    let text = text.replace(Emphasis::MARKER, "");
    let text = WRAPPER_TAGS.replace_all(&text, "");
    let text = HEADING_MARKER.replace_all(&text, "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

/// Stripped text cut to at most `max_chars` characters, with an ellipsis
/// when something was cut.
pub fn card_preview(raw: &str, max_chars: usize) -> String {
    let plain = strip_formatting(raw);
    if plain.chars().count() <= max_chars {
        return plain;
    }
    let cut: String = plain.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
