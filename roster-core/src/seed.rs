//! Records present in a freshly started store.

use serde_json::Value;

use crate::{id::RecordId, record::Record};

/// Returns the records a new store starts with.
///
/// A single student entry, with its `id` generated at call time.
#[must_use]
pub fn seed_records() -> Vec<Record> {
    let mut record = Record::new();
    record.assign_id(RecordId::new());
    record.insert("first_name", Value::from("Milosz"));
    record.insert("last_name", Value::from("Pisulak"));
    record.insert("role", Value::from("student"));
    vec![record]
}
