//! On-disk behaviour of `RecordStore`, using temp directories.

use pretty_assertions::assert_eq;
use salecast_core::{Dataset, ErrorKind, RawRecord, SalesRecord, UserId};
use salecast_store::{RecordStore, StoreError, append, read_upload};

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

fn rec(year: i32, month: u32, sales: f64) -> SalesRecord {
    SalesRecord { year, month, sales }
}

fn open_store() -> (tempfile::TempDir, RecordStore) {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let store = RecordStore::open(tmp.path().join("user_data")).expect("store opens");
    (tmp, store)
}

#[test]
fn load_without_file_is_empty_not_error() {
    let (_tmp, store) = open_store();
    let dataset = store.load(&user("1")).unwrap();
    assert!(dataset.is_empty());
    assert!(!store.exists(&user("1")));
}

#[test]
fn append_persist_load_preserves_append_order() {
    let (_tmp, store) = open_store();
    let alice = user("1");

    let first = append(
        Dataset::new(),
        &[RawRecord::new("2023", "3", "300"), RawRecord::new("2023", "1", "100")],
    )
    .unwrap();
    store.persist(&alice, &first).unwrap();

    let second = append(
        store.load(&alice).unwrap(),
        &[RawRecord::new("2022", "12", "99.5")],
    )
    .unwrap();
    store.persist(&alice, &second).unwrap();

    let loaded = store.load(&alice).unwrap();
    assert_eq!(
        loaded.records(),
        &[rec(2023, 3, 300.0), rec(2023, 1, 100.0), rec(2022, 12, 99.5)]
    );
}

#[test]
fn persisted_file_has_plain_csv_header() {
    let (_tmp, store) = open_store();
    let id = user("7");
    let dataset = Dataset::from_records(vec![rec(2023, 1, 100.0)]).unwrap();
    store.persist(&id, &dataset).unwrap();

    let text = std::fs::read_to_string(store.path_for(&id)).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("year,month,sales"));
    assert_eq!(lines.next(), Some("2023,1,100.0"));
}

#[test]
fn empty_dataset_still_writes_header() {
    let (_tmp, store) = open_store();
    let id = user("8");
    store.persist(&id, &Dataset::new()).unwrap();

    let text = std::fs::read_to_string(store.path_for(&id)).unwrap();
    assert_eq!(text.trim(), "year,month,sales");
    assert!(store.load(&id).unwrap().is_empty());
}

#[test]
fn users_do_not_see_each_other() {
    let (_tmp, store) = open_store();
    let dataset = Dataset::from_records(vec![rec(2023, 1, 1.0)]).unwrap();
    store.persist(&user("1"), &dataset).unwrap();

    assert_eq!(store.load(&user("1")).unwrap().len(), 1);
    assert!(store.load(&user("2")).unwrap().is_empty());
}

#[test]
fn upload_missing_column_names_the_column() {
    let err = read_upload("year,sales\n2023,5\n".as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("missing: month"), "{err}");
}

#[test]
fn upload_with_one_bad_row_imports_nothing() {
    let (_tmp, store) = open_store();
    let id = user("1");
    let dataset = Dataset::from_records(vec![rec(2023, 1, 100.0)]).unwrap();
    store.persist(&id, &dataset).unwrap();

    let rows = read_upload("year,month,sales\n2023,2,10\n2023,13,20\n".as_bytes()).unwrap();
    let err = append(store.load(&id).unwrap(), &rows).unwrap_err();
    assert_eq!(err.issues().len(), 1);
    assert_eq!(err.issues()[0].row, Some(2));

    assert_eq!(store.load(&id).unwrap().len(), 1);
}

#[test]
fn corrupt_file_is_reported_as_validation() {
    let (_tmp, store) = open_store();
    let id = user("3");
    std::fs::write(store.path_for(&id), "year,month,sales\n2023,44,1\n").unwrap();

    let err = store.load(&id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("corrupt"));
}

#[test]
fn write_failure_is_io() {
    let (tmp, store) = open_store();
    std::fs::remove_dir_all(tmp.path().join("user_data")).unwrap();

    let err = store
        .persist(&user("1"), &Dataset::from_records(vec![rec(2023, 1, 1.0)]).unwrap())
        .unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert_eq!(err.kind(), ErrorKind::Io);
}

/// Known gap: there is no locking. Two requests that load the same dataset
/// and each append one record race, and the last writer wins.
#[test]
fn concurrent_appends_are_last_writer_wins() {
    let (_tmp, store) = open_store();
    let id = user("1");
    store
        .persist(&id, &Dataset::from_records(vec![rec(2023, 1, 1.0)]).unwrap())
        .unwrap();

    let seen_by_a = store.load(&id).unwrap();
    let seen_by_b = store.load(&id).unwrap();

    let a = append(seen_by_a, &[RawRecord::new("2023", "2", "2")]).unwrap();
    let b = append(seen_by_b, &[RawRecord::new("2023", "3", "3")]).unwrap();
    store.persist(&id, &a).unwrap();
    store.persist(&id, &b).unwrap();

    let final_state = store.load(&id).unwrap();
    assert_eq!(final_state.records(), &[rec(2023, 1, 1.0), rec(2023, 3, 3.0)]);
}
