use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CARD_PREVIEW_CHARS;
use crate::markup::{self, EmbedProvider};
use crate::store::{Record, Table};

/// A curated YouTube video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedVideo {
    pub id: Uuid,
    pub title: String,
    pub video_id: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl CuratedVideo {
    /// Creates a video entry. `video` may be a bare id or a pasted share URL.
    pub fn new(title: impl Into<String>, video: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            video_id: EmbedProvider::Youtube.normalize_id(video.trim()),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn embed_url(&self) -> String {
        EmbedProvider::Youtube.embed_url(&self.video_id)
    }

    pub fn summary(&self) -> String {
        markup::card_preview(&self.description, CARD_PREVIEW_CHARS)
    }

    pub fn thumbnail_url(&self) -> String {
        format!("https://img.youtube.com/vi/{}/hqdefault.jpg", self.video_id)
    }
}

impl Record for CuratedVideo {
    const TABLE: Table = Table::CuratedVideos;

    fn id(&self) -> Uuid {
        self.id
    }

    fn ordered_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
