use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuthoredText, CARD_PREVIEW_CHARS};
use crate::store::{Record, Table};

/// A pedagogical resource in the catalog.
///
/// Materials are located by the four catalog fields; see
/// [`crate::catalog::MaterialFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: Uuid,
    pub education_level: String,
    pub grade: String,
    pub period: String,
    pub resource_type: String,
    pub title: String,
    pub body: AuthoredText,
    #[serde(default)]
    pub links: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl Material {
    pub fn new(
        education_level: impl Into<String>,
        grade: impl Into<String>,
        period: impl Into<String>,
        resource_type: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<AuthoredText>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            education_level: education_level.into(),
            grade: grade.into(),
            period: period.into(),
            resource_type: resource_type.into(),
            title: title.into(),
            body: body.into(),
            links: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn with_links(mut self, links: Vec<String>) -> Self {
        self.links = links;
        self
    }

    pub fn summary(&self) -> String {
        self.body.preview(CARD_PREVIEW_CHARS)
    }
}

impl Record for Material {
    const TABLE: Table = Table::Materials;

    fn id(&self) -> Uuid {
        self.id
    }

    fn ordered_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
