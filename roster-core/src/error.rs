//! Errors produced by the `roster-core` crate.

use crate::record::Record;

/// A request body was not a JSON object.
#[derive(Debug, thiserror::Error)]
#[error("Invalid request body: {reason}")]
pub struct InvalidBody {
    /// Parser message describing what was wrong.
    pub reason: String,
}

/// No record carries the requested id.
///
/// `snapshot` is the collection as it was when the lookup failed, so
/// callers can report it without taking the lock again.
#[derive(Debug, thiserror::Error)]
#[error("User not found. Operation failed")]
pub struct RecordNotFound {
    pub id: String,
    pub snapshot: Vec<Record>,
}
