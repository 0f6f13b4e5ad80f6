use std::cmp::Reverse;

use uuid::Uuid;

use super::{Record, StoreError, TableStore};

/// Table store held in memory, rows kept in insertion order.
#[derive(Debug, Clone)]
pub struct MemoryStore<R> {
    rows: Vec<R>,
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn position(&self, id: Uuid) -> Result<usize, StoreError> {
        self.rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or(StoreError::NotFound {
                table: R::TABLE.name(),
                id,
            })
    }
}

impl<R: Record> FromIterator<R> for MemoryStore<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<R: Record> TableStore<R> for MemoryStore<R> {
    fn list(&self) -> Result<Vec<R>, StoreError> {
        let mut rows = self.rows.clone();
        // Stable sort keeps insertion order between equal timestamps.
        rows.sort_by_key(|row| Reverse(row.ordered_at()));
        Ok(rows)
    }

    fn select(&self, predicate: &dyn Fn(&R) -> bool) -> Result<Vec<R>, StoreError> {
        Ok(self.rows.iter().filter(|row| predicate(row)).cloned().collect())
    }

    fn get(&self, id: Uuid) -> Result<R, StoreError> {
        let index = self.position(id)?;
        Ok(self.rows[index].clone())
    }

    fn insert(&mut self, record: R) -> Result<Uuid, StoreError> {
        let id = record.id();
        if self.rows.iter().any(|row| row.id() == id) {
            return Err(StoreError::Duplicate {
                table: R::TABLE.name(),
                id,
            });
        }
        log::debug!("insert {} {}", R::TABLE.name(), id);
        self.rows.push(record);
        Ok(id)
    }

    fn update(&mut self, record: R) -> Result<(), StoreError> {
        let index = self.position(record.id())?;
        log::debug!("update {} {}", R::TABLE.name(), record.id());
        self.rows[index] = record;
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let index = self.position(id)?;
        log::debug!("delete {} {}", R::TABLE.name(), id);
        self.rows.remove(index);
        Ok(())
    }
}
