use snippet_server::store::{CommandRecord, SnippetStore, DEMO_SNIPPET_ID};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn sample_record(command: &str) -> CommandRecord {
    CommandRecord {
        id: String::new(),
        command: String::from(command),
        description: String::from("a sample snippet"),
        difficulty: 3,
    }
}

#[test]
fn test_seeded_store_has_demo_records() {
    let store = SnippetStore::with_demo_records();
    assert_eq!(store.list().len(), 2);
    let demo = store.get(DEMO_SNIPPET_ID).unwrap();
    assert_eq!(demo.command, "kubectl get pods -A");
    assert_eq!(demo.difficulty, 1);
    assert!(store.get("get2").is_some());
}

#[test]
fn test_insert_assigns_fresh_id() {
    let store = SnippetStore::with_demo_records();
    let id = store.insert(sample_record("ls -la"));
    assert!(!id.is_empty());
    assert_ne!(id, DEMO_SNIPPET_ID);

    let record = store.get(&id).unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.command, "ls -la");
}

#[test]
fn test_insert_overwrites_client_supplied_id() {
    let store = SnippetStore::with_demo_records();
    let mut record = sample_record("pwd");
    record.id = String::from(DEMO_SNIPPET_ID);
    let id = store.insert(record);
    assert_ne!(id, DEMO_SNIPPET_ID);
    // The seed record is untouched.
    assert_eq!(store.get(DEMO_SNIPPET_ID).unwrap().command, "kubectl get pods -A");
    assert_eq!(store.list().len(), 3);
}

#[test]
fn test_get_missing_is_none() {
    let store = SnippetStore::with_demo_records();
    assert!(store.get("no-such-id").is_none());
}

#[test]
fn test_sequential_inserts_get_distinct_ids() {
    let store = SnippetStore::new();
    let ids: HashSet<String> = (0..50)
        .map(|i| store.insert(sample_record(&format!("echo {}", i))))
        .collect();
    assert_eq!(ids.len(), 50);
    assert_eq!(store.list().len(), 50);
}

#[test]
fn test_concurrent_inserts_are_not_lost() {
    let store = Arc::new(SnippetStore::with_demo_records());
    let n = 32;
    let handles: Vec<_> = (0..n)
        .map(|i| {
            let store = store.clone();
            thread::spawn(move || store.insert(sample_record(&format!("echo {}", i))))
        })
        .collect();
    let ids: HashSet<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(ids.len(), n);
    assert_eq!(store.list().len(), n + 2);
    for id in &ids {
        assert!(store.get(id).is_some());
    }
}

#[test]
fn test_list_snapshot_does_not_alias_store() {
    let store = SnippetStore::with_demo_records();
    let mut snapshot = store.list();
    snapshot.clear();
    snapshot.push(sample_record("rm -rf /"));

    assert_eq!(store.list().len(), 2);
    assert_eq!(store.get(DEMO_SNIPPET_ID).unwrap().command, "kubectl get pods -A");
}
