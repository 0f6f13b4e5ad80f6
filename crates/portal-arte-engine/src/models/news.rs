use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuthoredText, CARD_PREVIEW_CHARS};
use crate::markup;
use crate::store::{Record, Table};

/// A curated news entry pointing at an external article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub source_url: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub body: AuthoredText,
    pub published_at: DateTime<Utc>,
}

impl NewsItem {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            summary: summary.into(),
            source_url: source_url.into(),
            category: None,
            body: AuthoredText::default(),
            published_at: Utc::now(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<AuthoredText>) -> Self {
        self.body = body.into();
        self
    }

    /// Card text: the body preview, or the curator's summary when the body
    /// has nothing visible.
    pub fn summary(&self) -> String {
        let preview = self.body.preview(CARD_PREVIEW_CHARS);
        if preview.is_empty() {
            markup::card_preview(&self.summary, CARD_PREVIEW_CHARS)
        } else {
            preview
        }
    }
}

impl Record for NewsItem {
    const TABLE: Table = Table::CuratedNews;

    fn id(&self) -> Uuid {
        self.id
    }

    fn ordered_at(&self) -> DateTime<Utc> {
        self.published_at
    }
}
