//! Loosely-typed record payloads.
//!
//! No schema is enforced: whatever JSON object a client submits is stored
//! verbatim, apart from the `id` key which the server always owns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::InvalidBody, id::RecordId};

/// One entry in the collection: an ordered mapping of field names to JSON
/// values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    /// Key under which the server-assigned id is stored.
    pub const ID_KEY: &'static str = "id";

    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a request body into a record.
    ///
    /// # Errors
    /// Returns [`InvalidBody`] if `bytes` is not valid JSON or is
    /// valid JSON of any shape other than an object.
    pub fn from_json(bytes: &[u8]) -> Result<Self, InvalidBody> {
        serde_json::from_slice(bytes).map_err(|e| InvalidBody { reason: e.to_string() })
    }

    /// Returns the record's `id` when it is present and a string.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get(Self::ID_KEY).and_then(Value::as_str)
    }

    /// Sets `id`, replacing whatever value the key held before.
    ///
    /// An existing `id` key keeps its position; otherwise it is appended.
    pub fn assign_id(&mut self, id: RecordId) {
        self.0.insert(Self::ID_KEY.to_owned(), Value::String(id.to_string()));
    }

    pub(crate) fn assign_raw_id(&mut self, id: &str) {
        self.0.insert(Self::ID_KEY.to_owned(), Value::String(id.to_owned()));
    }

    /// Inserts a field, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Number of fields, `id` included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the record has no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Record {
        match Record::from_json(body.as_bytes()) {
            Ok(r) => r,
            Err(e) => panic!("expected {body} to parse: {e}"),
        }
    }

    #[test]
    fn from_json_accepts_arbitrary_object_shape() {
        let record = parse(r#"{"first_name":"A","age":31,"tags":["x"],"admin":false,"extra":null}"#);
        assert_eq!(record.len(), 5);
        assert_eq!(record.get("age"), Some(&Value::from(31)));
        assert_eq!(record.get("extra"), Some(&Value::Null));
        assert!(record.id().is_none(), "no id until the server assigns one");
    }

    #[test]
    fn from_json_preserves_field_order() {
        let record = parse(r#"{"role":"C","first_name":"A","last_name":"B"}"#);
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["role", "first_name", "last_name"]);
    }

    #[test]
    fn from_json_rejects_malformed_json() {
        match Record::from_json(b"{\"first_name\": ") {
            Ok(r) => panic!("truncated JSON must be rejected, got {r:?}"),
            Err(e) => assert!(!e.reason.is_empty(), "rejection must carry the parser message"),
        }
    }

    #[test]
    fn from_json_rejects_non_object_values() {
        for body in ["[]", "\"text\"", "42", "null", "true"] {
            let err = Record::from_json(body.as_bytes());
            assert!(err.is_err(), "{body} must be rejected, got {err:?}");
        }
    }

    #[test]
    fn from_json_rejects_empty_body() {
        assert!(Record::from_json(b"").is_err());
    }

    #[test]
    fn assign_id_overwrites_client_value_in_place() {
        let mut record = parse(r#"{"first_name":"X","id":"client-chosen","role":"R"}"#);
        let id = RecordId::new();
        record.assign_id(id);

        assert_eq!(record.id(), Some(id.to_string().as_str()));
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["first_name", "id", "role"], "existing id key keeps its slot");
    }

    #[test]
    fn assign_id_appends_when_absent() {
        let mut record = parse(r#"{"first_name":"X"}"#);
        record.assign_id(RecordId::new());
        assert_eq!(record.keys().last().map(String::as_str), Some(Record::ID_KEY));
    }

    #[test]
    fn id_ignores_non_string_values() {
        let record = parse(r#"{"id": 7}"#);
        assert!(record.id().is_none());
    }

    #[test]
    fn serializes_as_plain_object() {
        let record = parse(r#"{"b":1,"a":2}"#);
        let json = match serde_json::to_string(&record) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"b":1,"a":2}"#);
    }
}
