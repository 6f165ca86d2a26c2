//! Record storage behind a small CRUD seam.
//!
//! Screens own one repository each. The in-memory store is the only backend
//! today; a persistent one can implement [`Repository`] without touching the
//! screens.

use std::collections::HashSet;

use entity::Record;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DbError {
    #[error("record {0} not found")]
    NotFound(Uuid),
    #[error("record {0} already exists")]
    DuplicateId(Uuid),
}

pub type DbResult<T> = Result<T, DbError>;

/// CRUD over one collection. Order is insertion order with prepends at the
/// front, which screens use for "most recent first".
pub trait Repository<T: Record> {
    fn all(&self) -> DbResult<Vec<T>>;

    fn find(&self, id: Uuid) -> DbResult<Option<T>>;

    /// Inserts at the front.
    fn prepend(&mut self, record: T) -> DbResult<()>;

    /// Inserts at the back, all or nothing. Returns the number inserted.
    fn append(&mut self, records: Vec<T>) -> DbResult<usize>;

    /// Swaps the stored record with the same id, returning the previous one.
    fn replace(&mut self, record: T) -> DbResult<T>;

    fn remove(&mut self, id: Uuid) -> DbResult<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, id: Uuid) -> DbResult<T> {
        self.find(id)?.ok_or(DbError::NotFound(id))
    }
}

#[derive(Clone, Debug)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store, rejecting duplicate ids.
    pub fn with_records(records: Vec<T>) -> DbResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(DbError::DuplicateId(record.id()));
            }
        }
        Ok(Self { records })
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn ensure_absent(&self, id: Uuid) -> DbResult<()> {
        match self.position(id) {
            Some(_) => Err(DbError::DuplicateId(id)),
            None => Ok(()),
        }
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn all(&self) -> DbResult<Vec<T>> {
        Ok(self.records.clone())
    }

    fn find(&self, id: Uuid) -> DbResult<Option<T>> {
        Ok(self.position(id).map(|idx| self.records[idx].clone()))
    }

    fn prepend(&mut self, record: T) -> DbResult<()> {
        self.ensure_absent(record.id())?;
        self.records.insert(0, record);
        Ok(())
    }

    fn append(&mut self, records: Vec<T>) -> DbResult<usize> {
        let mut incoming = HashSet::with_capacity(records.len());
        for record in &records {
            self.ensure_absent(record.id())?;
            if !incoming.insert(record.id()) {
                return Err(DbError::DuplicateId(record.id()));
            }
        }
        let count = records.len();
        self.records.extend(records);
        tracing::debug!(count, total = self.records.len(), "records appended");
        Ok(count)
    }

    fn replace(&mut self, record: T) -> DbResult<T> {
        let id = record.id();
        let idx = self.position(id).ok_or(DbError::NotFound(id))?;
        Ok(std::mem::replace(&mut self.records[idx], record))
    }

    fn remove(&mut self, id: Uuid) -> DbResult<T> {
        let idx = self.position(id).ok_or(DbError::NotFound(id))?;
        Ok(self.records.remove(idx))
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
