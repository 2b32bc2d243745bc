//! Tests for the guestbook store: append/read round-trips, corrupt-line
//! tolerance, and file creation.

use tamu::guestbook::{Entry, GuestbookStore};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> GuestbookStore {
    GuestbookStore::open(dir.path().join("guestbook.jsonl"))
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert_eq!(store.entries().unwrap().len(), 0);
    assert_eq!(store.count(), 0);
}

#[test]
fn append_then_read_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let entry = Entry::new("Ada".to_string(), 3, "lovely kiosk".to_string());
    store.append(&entry).unwrap();

    let read = store.entries().unwrap();
    assert_eq!(read.len(), 1);
    assert_eq!(read[0], entry);
}

#[test]
fn entries_keep_submission_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    for i in 1..=4 {
        store
            .append(&Entry::new(format!("visitor {}", i), i, "hi".to_string()))
            .unwrap();
    }

    let names: Vec<String> = store.entries().unwrap().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["visitor 1", "visitor 2", "visitor 3", "visitor 4"]);
}

#[test]
fn corrupt_lines_are_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .append(&Entry::new("Ada".to_string(), 1, "first".to_string()))
        .unwrap();
    std::fs::write(
        store.path(),
        format!(
            "{}\nnot json at all\n{}\n",
            serde_line("Ada", 1, "first"),
            serde_line("Grace", 2, "second"),
        ),
    )
    .unwrap();

    let read = store.entries().unwrap();
    assert_eq!(read.len(), 2);
    assert_eq!(read[1].name, "Grace");
}

#[test]
fn append_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = GuestbookStore::open(dir.path().join("data").join("book.jsonl"));
    store
        .append(&Entry::new("Ada".to_string(), 1, "hi".to_string()))
        .unwrap();
    assert_eq!(store.count(), 1);
}

fn serde_line(name: &str, avatar: usize, comment: &str) -> String {
    format!(
        r#"{{"name":"{}","avatar":{},"comment":"{}","timestamp":0}}"#,
        name, avatar, comment
    )
}
