//! Catalog lookup for the materials filter wizard.
//!
//! The wizard narrows the catalog by education level, grade, period and
//! resource type. A fully specified filter is expected to identify at most
//! one material.

use serde::{Deserialize, Serialize};

use crate::models::Material;
use crate::store::{StoreError, TableStore};

/// Equality filter over the four catalog fields. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialFilter {
    pub education_level: Option<String>,
    pub grade: Option<String>,
    pub period: Option<String>,
    pub resource_type: Option<String>,
}

impl MaterialFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn education_level(mut self, value: impl Into<String>) -> Self {
        self.education_level = Some(value.into());
        self
    }

    pub fn grade(mut self, value: impl Into<String>) -> Self {
        self.grade = Some(value.into());
        self
    }

    pub fn period(mut self, value: impl Into<String>) -> Self {
        self.period = Some(value.into());
        self
    }

    pub fn resource_type(mut self, value: impl Into<String>) -> Self {
        self.resource_type = Some(value.into());
        self
    }

    /// True once every field has been chosen.
    pub fn is_complete(&self) -> bool {
        self.education_level.is_some()
            && self.grade.is_some()
            && self.period.is_some()
            && self.resource_type.is_some()
    }

    pub fn matches(&self, material: &Material) -> bool {
        fn field(wanted: &Option<String>, actual: &str) -> bool {
            wanted.as_deref().is_none_or(|w| w == actual)
        }
        field(&self.education_level, &material.education_level)
            && field(&self.grade, &material.grade)
            && field(&self.period, &material.period)
            && field(&self.resource_type, &material.resource_type)
    }
}

/// Finds the material selected by `filter`.
///
/// Returns the first match in store order. More than one match means the
/// catalog holds duplicates; that is logged, not treated as an error.
pub fn find_material<S>(store: &S, filter: &MaterialFilter) -> Result<Option<Material>, StoreError>
where
    S: TableStore<Material>,
{
    let found = store.select(&|m: &Material| filter.matches(m))?;
    if found.len() > 1 {
        log::warn!(
            "{} materials match filter {:?}; using the first",
            found.len(),
            filter
        );
    }
    Ok(found.into_iter().next())
}
