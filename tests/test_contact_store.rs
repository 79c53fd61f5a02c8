//! Integration tests for the contact store.
//!
//! Every test works on its own temporary directory, so stores never share a
//! data file.

use contact_directory::{ContactStore, ContactUpdate, SortKey};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn data_path(dir: &TempDir) -> PathBuf {
    dir.path().join("contacts.json")
}

fn seeded_store(dir: &TempDir) -> ContactStore {
    let mut store = ContactStore::open(data_path(dir)).unwrap();
    store.add("Carol White", "+1 555 000 0003", "carol@example.com").unwrap();
    store.add("alice Smith", "555-0001-00", "Alice@Example.org").unwrap();
    store.add("Bob Stone", "(555) 000-0002", "bob@sample.net").unwrap();
    store
}

#[test]
fn test_round_trip_preserves_ids_fields_and_order() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);
    let before = store.contacts().to_vec();
    drop(store);

    let reopened = ContactStore::open(data_path(&dir)).unwrap();
    assert_eq!(reopened.contacts(), before.as_slice());
    assert_eq!(reopened.metrics().loads_total(), 1);
    assert_eq!(reopened.metrics().contacts_loaded_total(), 3);
}

#[test]
fn test_file_format_is_pretty_json_array() {
    let dir = TempDir::new().unwrap();
    let mut store = ContactStore::open(data_path(&dir)).unwrap();
    store.add("José Müller", "5551234", "jose@example.de").unwrap();

    let text = fs::read_to_string(data_path(&dir)).unwrap();
    let expected = r#"[
  {
    "id": 1,
    "name": "José Müller",
    "phone": "5551234",
    "email": "jose@example.de"
  }
]"#;
    assert_eq!(text, expected);
}

#[test]
fn test_ids_are_max_plus_one() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded_store(&dir);

    assert!(store.delete(2).unwrap());
    let next = store.add("Dan", "5550004", "dan@example.com").unwrap();
    assert_eq!(next.id, 4);

    // Deleting from the middle never lowers the maximum.
    assert!(store.delete(1).unwrap());
    let next = store.add("Eve", "5550005", "eve@example.com").unwrap();
    assert_eq!(next.id, 5);
}

#[test]
fn test_highest_id_is_reissued_after_restart() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded_store(&dir);
    assert!(store.delete(3).unwrap());
    drop(store);

    let mut reopened = ContactStore::open(data_path(&dir)).unwrap();
    let next = reopened.add("Frank", "5550006", "frank@example.com").unwrap();
    assert_eq!(next.id, 3);
}

#[test]
fn test_invalid_json_is_backed_up_and_reset() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    let garbage = b"[{\"id\": 1, \"name\": \"Ada\",";
    fs::write(&path, garbage).unwrap();

    let mut store = ContactStore::open(&path).unwrap();

    assert!(store.is_empty());
    assert_eq!(fs::read(store.backup_path()).unwrap(), garbage);
    assert_eq!(fs::read(&path).unwrap(), b"[]");

    let recovery = store.recovery().unwrap();
    assert!(recovery.backed_up);
    assert_eq!(recovery.backup_path, dir.path().join("contacts.json.bak"));
    assert!(!recovery.detail.is_empty());
    assert_eq!(store.metrics().recoveries_total(), 1);

    // Still usable afterwards.
    let ada = store.add("Ada", "5551234", "ada@example.com").unwrap();
    assert_eq!(ada.id, 1);
    drop(store);
    assert_eq!(ContactStore::open(&path).unwrap().len(), 1);
}

#[test]
fn test_wrong_shape_is_backed_up_and_reset() {
    let shapes: [&str; 5] = [
        r#"{"contacts": []}"#,
        r#"[{"id": 1, "name": "Ada", "phone": "5551234"}]"#,
        r#"[{"id": 1, "name": "Ada", "phone": "5551234", "email": "a@b.c", "age": 3}]"#,
        r#"[{"id": "1", "name": "Ada", "phone": "5551234", "email": "a@b.c"}]"#,
        r#"[{"id": 0, "name": "Ada", "phone": "5551234", "email": "a@b.c"}]"#,
    ];

    for shape in shapes {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);
        fs::write(&path, shape).unwrap();

        let store = ContactStore::open(&path).unwrap();
        assert!(store.is_empty(), "{} should reset the store", shape);
        assert_eq!(fs::read_to_string(store.backup_path()).unwrap(), shape);
    }
}

#[test]
fn test_recovery_overwrites_previous_backup() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    fs::write(dir.path().join("contacts.json.bak"), "old backup").unwrap();
    fs::write(&path, "new garbage").unwrap();

    let store = ContactStore::open(&path).unwrap();
    assert_eq!(
        fs::read_to_string(store.backup_path()).unwrap(),
        "new garbage"
    );
}

#[test]
fn test_empty_file_is_treated_as_corrupted() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    fs::write(&path, "").unwrap();

    let store = ContactStore::open(&path).unwrap();
    assert!(store.recovery().is_some());
    assert!(store.is_empty());
}

#[test]
fn test_partial_update_changes_only_given_fields() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded_store(&dir);
    let before = store.find_by_id(1).unwrap().clone();

    let updated = store
        .update(1, ContactUpdate::new().name("Bob"))
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Bob");
    assert_eq!(updated.phone, before.phone);
    assert_eq!(updated.email, before.email);
    drop(store);

    let reopened = ContactStore::open(data_path(&dir)).unwrap();
    assert_eq!(reopened.find_by_id(1).unwrap(), &updated);
}

#[test]
fn test_update_blank_fields_are_ignored_and_values_trimmed() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded_store(&dir);

    let updated = store
        .update(
            2,
            ContactUpdate::new().name("   ").phone(" 5559999 ").email(""),
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "alice Smith");
    assert_eq!(updated.phone, "5559999");
    assert_eq!(updated.email, "Alice@Example.org");
}

#[test]
fn test_update_unknown_id_returns_none() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded_store(&dir);
    assert!(store.update(99, ContactUpdate::new().name("X")).unwrap().is_none());
}

#[test]
fn test_delete_unknown_id_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded_store(&dir);
    let saves = store.metrics().saves_total();
    let bytes = fs::read(data_path(&dir)).unwrap();

    assert!(!store.delete(99).unwrap());
    assert_eq!(store.metrics().saves_total(), saves);
    assert_eq!(fs::read(data_path(&dir)).unwrap(), bytes);
}

#[test]
fn test_find_by_id() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);
    assert_eq!(store.find_by_id(3).unwrap().name, "Bob Stone");
    assert!(store.find_by_id(42).is_none());
}

#[test]
fn test_list_sorts_by_each_field() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    let ids = |key: SortKey| -> Vec<u64> { store.list(key).iter().map(|c| c.id).collect() };

    // Byte-wise ordering: uppercase sorts before lowercase.
    assert_eq!(ids(SortKey::ByName), vec![3, 1, 2]);
    assert_eq!(ids(SortKey::ById), vec![1, 2, 3]);
    assert_eq!(ids(SortKey::ByPhone), vec![3, 1, 2]);
    assert_eq!(ids(SortKey::ByEmail), vec![2, 3, 1]);
}

#[test]
fn test_list_accepts_field_names_with_name_fallback() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    assert_eq!(store.list("id"), store.list(SortKey::ById));
    assert_eq!(store.list("bogus"), store.list(SortKey::ByName));
    assert_eq!(store.list(""), store.list(SortKey::ByName));
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);

    let ids = |q: &str| -> Vec<u64> { store.search(q).iter().map(|c| c.id).collect() };

    assert_eq!(ids("ALICE"), vec![2]);
    assert_eq!(ids("example"), vec![1, 2]);
    assert_eq!(ids("(555)"), vec![3]);
    assert_eq!(ids("  stone  "), vec![3]);
    assert!(ids("nobody").is_empty());
}

#[test]
fn test_search_blank_query_returns_nothing() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir);
    assert!(store.search("").is_empty());
    assert!(store.search("   ").is_empty());
}

/// The store trims but does not validate on write; callers validate first.
#[test]
fn test_add_and_update_do_not_validate() {
    let dir = TempDir::new().unwrap();
    let mut store = ContactStore::open(data_path(&dir)).unwrap();

    let odd = store.add("   ", "not a phone", "not an email").unwrap();
    assert_eq!(odd.name, "");
    assert_eq!(odd.phone, "not a phone");

    let updated = store
        .update(odd.id, ContactUpdate::new().email("still@bad"))
        .unwrap()
        .unwrap();
    assert_eq!(updated.email, "still@bad");
}

#[test]
fn test_stale_temp_file_is_ignored_and_replaced() {
    let dir = TempDir::new().unwrap();
    let mut store = seeded_store(&dir);
    fs::write(store.temp_path(), "half-written").unwrap();
    drop(store);

    store = ContactStore::open(data_path(&dir)).unwrap();
    assert_eq!(store.len(), 3);

    store.add("Dan", "5550004", "dan@example.com").unwrap();
    assert!(!store.temp_path().exists());
    assert_eq!(ContactStore::open(data_path(&dir)).unwrap().len(), 4);
}

#[test]
fn test_unreadable_path_is_moved_aside_and_reset() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    fs::create_dir(&path).unwrap();

    let store = ContactStore::open(&path).unwrap();
    let recovery = store.recovery().unwrap();
    assert!(recovery.backed_up);
    assert!(!recovery.detail.is_empty());
    assert!(store.is_empty());

    assert!(store.backup_path().is_dir());
    assert!(path.is_file());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_failed_backup_rename_still_resets() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    let backup = dir.path().join("contacts.json.bak");
    fs::create_dir(&backup).unwrap();
    fs::write(backup.join("keep.txt"), "occupied").unwrap();
    fs::write(&path, "{not json").unwrap();

    let store = ContactStore::open(&path).unwrap();
    let recovery = store.recovery().unwrap();
    assert!(!recovery.backed_up);
    assert_eq!(recovery.backup_path, backup);
    assert!(store.is_empty());

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    assert!(backup.join("keep.txt").is_file());
}
