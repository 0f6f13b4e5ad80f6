use serde::{Deserialize, Serialize};

use crate::markup::{self, DisplayBlock};

/// Rich text written in the admin editor, stored verbatim.
///
/// The stored form is always the raw string; blocks are recomputed on every
/// render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthoredText(String);

impl AuthoredText {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn render(&self) -> Vec<DisplayBlock> {
        markup::render_document(&self.0)
    }

    pub fn to_html(&self) -> String {
        markup::to_html(&self.render())
    }

    pub fn plain(&self) -> String {
        markup::strip_formatting(&self.0)
    }

    pub fn preview(&self, max_chars: usize) -> String {
        markup::card_preview(&self.0, max_chars)
    }
}

impl From<&str> for AuthoredText {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for AuthoredText {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
