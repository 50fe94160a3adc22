use std::fmt;

use uuid::Uuid;

/// Server-assigned identifier for a record.
///
/// Records store the hyphenated form as a plain string under `id`; ids
/// arriving from clients are only ever compared as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generates a random v4 id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
