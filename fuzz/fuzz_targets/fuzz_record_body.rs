//! Fuzz target: parsing request bodies into records.
//!
//! Arbitrary bytes must never panic the parser, and anything it accepts
//! must survive id assignment and re-serialization as a JSON object.

#![no_main]

use libfuzzer_sys::fuzz_target;
use roster_core::{Record, RecordId};

fuzz_target!(|data: &[u8]| {
    let Ok(mut record) = Record::from_json(data) else {
        return;
    };
    record.assign_id(RecordId::new());
    assert!(record.id().is_some());

    let encoded = serde_json::to_vec(&record).expect("record serializes");
    let value: serde_json::Value = serde_json::from_slice(&encoded).expect("output is JSON");
    assert!(value.is_object());
});
