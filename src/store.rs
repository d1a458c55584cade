// store.rs
use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub type SnippetId = String;

/// Identifier of the seeded demo record served by the by-id route.
pub const DEMO_SNIPPET_ID: &str = "get1";

/// A stored shell-command entry. Missing body fields deserialize to their
/// zero values; a client-supplied id is overwritten on insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandRecord {
    pub id: SnippetId,
    pub command: String,
    pub description: String,
    pub difficulty: i32,
}

/// In-memory snippet collection behind a single exclusive lock. All three
/// operations serialize on it; readers get clones, never references into
/// the map.
pub struct SnippetStore {
    records: Mutex<HashMap<SnippetId, CommandRecord>>,
}

impl SnippetStore {
    pub fn new() -> Self {
        SnippetStore {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// A store pre-populated with the two demo records every fresh
    /// instance carries.
    pub fn with_demo_records() -> Self {
        let store = Self::new();
        {
            let mut records = store.records.lock().unwrap();
            for id in &[DEMO_SNIPPET_ID, "get2"] {
                records.insert(
                    String::from(*id),
                    CommandRecord {
                        id: String::from(*id),
                        command: String::from("kubectl get pods -A"),
                        description: String::from("Gets pods across all namespaces"),
                        difficulty: 1,
                    },
                );
            }
        }
        store
    }

    /// Assigns a fresh timestamp-derived id, stores the record under it and
    /// returns the id. The stamp is bumped until the key is free, so a burst
    /// of inserts landing on the same nanosecond cannot overwrite each other.
    pub fn insert(&self, mut record: CommandRecord) -> SnippetId {
        let mut records = self.records.lock().unwrap();
        let mut stamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        while records.contains_key(&stamp.to_string()) {
            stamp += 1;
        }
        let id = stamp.to_string();
        record.id = id.clone();
        records.insert(id.clone(), record);
        id
    }

    /// Snapshot of all current records, in unspecified order.
    pub fn list(&self) -> Vec<CommandRecord> {
        let records = self.records.lock().unwrap();
        records.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<CommandRecord> {
        let records = self.records.lock().unwrap();
        records.get(id).cloned()
    }
}

impl Default for SnippetStore {
    fn default() -> Self {
        Self::new()
    }
}
