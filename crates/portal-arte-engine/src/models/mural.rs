use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuthoredText, CARD_PREVIEW_CHARS};
use crate::store::{Record, Table};

/// A teacher's submission to the mural gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuralPost {
    pub id: Uuid,
    pub author_name: String,
    #[serde(default)]
    pub school: Option<String>,
    pub title: String,
    pub body: AuthoredText,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl MuralPost {
    pub fn new(
        author_name: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<AuthoredText>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_name: author_name.into(),
            school: None,
            title: title.into(),
            body: body.into(),
            image_urls: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = Some(school.into());
        self
    }

    pub fn with_images(mut self, image_urls: Vec<String>) -> Self {
        self.image_urls = image_urls;
        self
    }

    /// Byline shown under the card title: author, then school when known.
    pub fn byline(&self) -> String {
        match &self.school {
            Some(school) if !school.trim().is_empty() => {
                format!("{} · {}", self.author_name, school.trim())
            }
            _ => self.author_name.clone(),
        }
    }

    pub fn summary(&self) -> String {
        self.body.preview(CARD_PREVIEW_CHARS)
    }
}

impl Record for MuralPost {
    const TABLE: Table = Table::MuralPosts;

    fn id(&self) -> Uuid {
        self.id
    }

    fn ordered_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
