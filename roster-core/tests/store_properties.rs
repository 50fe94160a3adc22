//! Property tests: id assignment across arbitrary create/remove sequences.

use std::collections::HashSet;

use proptest::prelude::*;
use roster_core::{Record, RecordStore};
use serde_json::Value;

fn client_record(client_id: Option<&str>, name: &str) -> Record {
    let mut record = Record::new();
    if let Some(id) = client_id {
        record.insert("id", Value::from(id));
    }
    record.insert("first_name", Value::from(name));
    record
}

proptest! {
    #[test]
    fn created_ids_are_pairwise_distinct(
        names in proptest::collection::vec("[a-zA-Z]{0,12}", 1..40),
        client_id in proptest::option::of("[a-z0-9-]{1,36}"),
    ) {
        let store = RecordStore::seeded();
        let mut seen: HashSet<String> = store
            .list()
            .iter()
            .filter_map(Record::id)
            .map(str::to_owned)
            .collect();

        for name in &names {
            let created = store.create(client_record(client_id.as_deref(), name));
            let id = created.record.id().map(str::to_owned);
            prop_assert!(id.is_some(), "created record has no id");
            let id = id.unwrap_or_default();
            prop_assert!(!id.is_empty());
            prop_assert_ne!(Some(id.as_str()), client_id.as_deref());
            prop_assert!(seen.insert(id), "duplicate id generated");
        }

        prop_assert_eq!(store.len(), names.len() + 1);
    }

    #[test]
    fn removals_keep_remaining_order(
        count in 1usize..20,
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..20),
    ) {
        let store = RecordStore::new();
        for i in 0..count {
            store.create(client_record(None, &i.to_string()));
        }

        let mut expected = store.list();
        for pick in picks {
            if expected.is_empty() {
                break;
            }
            let victim = expected.remove(pick.index(expected.len()));
            let id = victim.id().map(str::to_owned).unwrap_or_default();
            let removed = store.remove(&id);
            prop_assert!(removed.is_ok(), "existing id {} was not removed", id);
            prop_assert_eq!(store.list(), expected.clone());
        }
    }
}
