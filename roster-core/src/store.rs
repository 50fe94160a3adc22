//! In-memory record collection.
//!
//! The store owns the only copy of the collection. Every operation takes
//! the lock exactly once, so the snapshot it hands back is the collection
//! as that operation left it.

use std::sync::RwLock;

use tracing::debug;

use crate::{error::RecordNotFound, id::RecordId, record::Record, seed::seed_records};

/// Result of a successful create, update or remove.
#[derive(Debug, Clone)]
pub struct Mutation {
    /// The record that was stored, replaced or removed.
    pub record: Record,
    /// The whole collection after the change, in insertion order.
    pub snapshot: Vec<Record>,
}

/// Thread-safe, insertion-ordered collection of records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<Vec<Record>>,
}

impl RecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding [`seed_records`].
    #[must_use]
    pub fn seeded() -> Self {
        Self { records: RwLock::new(seed_records()) }
    }

    /// Return a copy of every record in insertion order.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn list(&self) -> Vec<Record> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.records.read().expect("record store read lock poisoned").clone()
    }

    /// Number of records currently held.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.records.read().expect("record store read lock poisoned").len()
    }

    /// `true` when no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assign a fresh id to `record` and append it.
    ///
    /// Any `id` the client supplied is overwritten.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn create(&self, mut record: Record) -> Mutation {
        record.assign_id(RecordId::new());

        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut records = self.records.write().expect("record store write lock poisoned");
        records.push(record.clone());
        debug!(count = records.len(), "record appended");

        Mutation { record, snapshot: records.clone() }
    }

    /// Remove the first record whose `id` equals `id` exactly.
    ///
    /// The remaining records keep their relative order.
    ///
    /// # Errors
    /// Returns [`RecordNotFound`] carrying the unchanged
    /// collection if no record matches.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn remove(&self, id: &str) -> Result<Mutation, RecordNotFound> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut records = self.records.write().expect("record store write lock poisoned");

        let Some(index) = position(&records, id) else {
            return Err(RecordNotFound { id: id.to_owned(), snapshot: records.clone() });
        };
        let record = records.remove(index);
        debug!(count = records.len(), "record removed");

        Ok(Mutation { record, snapshot: records.clone() })
    }

    /// Replace the fields of the record whose `id` equals `id`.
    ///
    /// The record keeps its position and its id; an `id` inside
    /// `replacement` is ignored.
    ///
    /// # Errors
    /// Returns [`RecordNotFound`] carrying the unchanged
    /// collection if no record matches.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn update(&self, id: &str, mut replacement: Record) -> Result<Mutation, RecordNotFound> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut records = self.records.write().expect("record store write lock poisoned");

        let Some(index) = position(&records, id) else {
            return Err(RecordNotFound { id: id.to_owned(), snapshot: records.clone() });
        };
        replacement.assign_raw_id(id);
        records[index] = replacement.clone();

        Ok(Mutation { record: replacement, snapshot: records.clone() })
    }
}

fn position(records: &[Record], id: &str) -> Option<usize> {
    records.iter().position(|r| r.id() == Some(id))
}
