//! # Table Store
//!
//! The hosted backend is plain CRUD storage over four tables. This module is
//! the seam the rest of the engine talks to: whole-record inserts and
//! updates, deletes by id, ordered listings and predicate selects.
//! [`MemoryStore`] is the in-process implementation.

pub mod memory;

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub use memory::MemoryStore;

/// The backend's record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Materials,
    MuralPosts,
    CuratedNews,
    CuratedVideos,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Materials => "materials",
            Table::MuralPosts => "mural_posts",
            Table::CuratedNews => "curated_news",
            Table::CuratedVideos => "curated_videos",
        }
    }
}

/// A row of one of the backend tables.
pub trait Record: Clone {
    const TABLE: Table;

    fn id(&self) -> Uuid;

    /// Timestamp feed listings are ordered by, newest first.
    fn ordered_at(&self) -> DateTime<Utc>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No {table} record with id {id}")]
    NotFound { table: &'static str, id: Uuid },
    #[error("A {table} record with id {id} already exists")]
    Duplicate { table: &'static str, id: Uuid },
}

/// CRUD access to one table.
pub trait TableStore<R: Record> {
    /// Every record, newest first.
    fn list(&self) -> Result<Vec<R>, StoreError>;

    /// Records matching `predicate`, in store order.
    fn select(&self, predicate: &dyn Fn(&R) -> bool) -> Result<Vec<R>, StoreError>;

    fn get(&self, id: Uuid) -> Result<R, StoreError>;

    fn insert(&mut self, record: R) -> Result<Uuid, StoreError>;

    /// Replaces the whole record with the same id.
    fn update(&mut self, record: R) -> Result<(), StoreError>;

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError>;

    fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_ok()
    }
}
