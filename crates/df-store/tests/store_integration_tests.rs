//! Integration tests for the catalog store against real database files.
//!
//! Each test works on a fresh file in a temporary directory, closing and
//! reopening the session to check what actually reached disk.

use df_core::{Column, ColumnType, Dataset, Value};
use df_store::{with_session, CatalogDb, StoreError, TocEntry};
use std::path::PathBuf;

// ── Helpers ────────────────────────────────────────────────────────────

fn scratch_db() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.duckdb");
    (dir, path)
}

fn records(rows: &[(i64, i64)]) -> Dataset {
    Dataset::from_rows(
        vec![
            Column::new("field_1", ColumnType::Integer),
            Column::new("field_2", ColumnType::Integer),
        ],
        rows.iter()
            .map(|(a, b)| vec![Value::Integer(*a), Value::Integer(*b)])
            .collect(),
    )
    .unwrap()
}

// ── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn fresh_database_has_empty_registries() {
    let (_dir, path) = scratch_db();
    let db = CatalogDb::open(&path).unwrap();
    assert!(db.list_contents().unwrap().is_empty());
    assert!(db.list_values().unwrap().is_empty());
    assert_eq!(db.list_tables().unwrap(), vec!["toc", "tov"]);
}

#[test]
fn saved_dataset_survives_reopen() {
    let (_dir, path) = scratch_db();
    let ds = records(&[(1, 2), (3, 4), (5, 6)]);
    {
        let mut db = CatalogDb::open(&path).unwrap();
        db.save_dataframe(&ds, "table1", "This is an example table", true)
            .unwrap();
        db.close().unwrap();
    }

    let db = CatalogDb::open(&path).unwrap();
    assert_eq!(db.get_table("table1").unwrap(), ds);
    assert_eq!(
        db.list_contents().unwrap(),
        vec![TocEntry {
            name: "table1".to_string(),
            description: "This is an example table".to_string(),
        }]
    );
}

#[test]
fn duplicate_save_after_reopen_is_rejected() {
    let (_dir, path) = scratch_db();
    let original = records(&[(1, 2)]);
    with_session(&path, |db| {
        db.save_dataframe(&original, "table1", "This is an example table", true)
    })
    .unwrap();

    let result = with_session(&path, |db| {
        db.save_dataframe(&records(&[(9, 9)]), "table1", "tasdasdsa", false)
    });
    assert!(matches!(result, Err(StoreError::DuplicateKey { .. })));

    let db = CatalogDb::open(&path).unwrap();
    assert_eq!(db.get_table("table1").unwrap(), original);
}

#[test]
fn values_and_tables_coexist() {
    let (_dir, path) = scratch_db();
    with_session(&path, |db| {
        db.save_dataframe(&records(&[(1, 1)]), "a", "first", true)?;
        db.save_dataframe(&records(&[(2, 2), (3, 3)]), "b", "second", true)?;
        db.add_value("my-value", "made up", 1233.0123, "float", true)?;
        db.add_value("count", "rows", 3.0, "int", true)
    })
    .unwrap();

    let db = CatalogDb::open(&path).unwrap();
    assert_eq!(db.list_tables().unwrap(), vec!["a", "b", "toc", "tov"]);
    assert_eq!(db.list_contents().unwrap().len(), 2);

    let value = db.get_value("my-value").unwrap().unwrap();
    assert!((value.value - 1233.0123).abs() < 1e-6);
    assert_eq!(value.value_type, "float");
    assert_eq!(db.get_value("count").unwrap().unwrap().value_type, "int");

    // values never get their own table
    assert!(!db.table_exists("my-value").unwrap_or(false));
}

#[test]
fn remove_value_persists() {
    let (_dir, path) = scratch_db();
    with_session(&path, |db| {
        db.add_value("my-value", "d", 1233.0123, "float", true)?;
        db.remove_value("my-value").map(|_| ())
    })
    .unwrap();

    let db = CatalogDb::open(&path).unwrap();
    assert!(db.get_value("my-value").unwrap().is_none());
}

#[test]
fn remove_table_persists() {
    let (_dir, path) = scratch_db();
    with_session(&path, |db| {
        db.save_dataframe(&records(&[(1, 2)]), "gone", "d", true)?;
        db.save_dataframe(&records(&[(1, 2)]), "kept", "d", true)?;
        db.remove_table("gone")
    })
    .unwrap();

    let db = CatalogDb::open(&path).unwrap();
    assert_eq!(db.list_tables().unwrap(), vec!["kept", "toc", "tov"]);
    assert_eq!(db.list_contents().unwrap().len(), 1);
}

#[test]
fn every_entry_has_a_matching_table() {
    let (_dir, path) = scratch_db();
    let db = CatalogDb::open(&path).unwrap();
    for (i, name) in ["t1", "T1", "t2", "t3"].iter().enumerate() {
        let _ = db.save_dataframe(&records(&[(i as i64, 0)]), name, "d", true);
    }
    let _ = db.save_dataframe(&records(&[(0, 0)]), "t2", "d", false);
    let _ = db.save_dataframe(&records(&[(0, 0)]), "bad-name", "d", true);
    db.remove_table("t3").unwrap();

    let tables = db.list_tables().unwrap();
    let contents = db.list_contents().unwrap();
    for entry in &contents {
        assert!(
            tables.iter().any(|t| t.eq_ignore_ascii_case(&entry.name)),
            "entry {} has no table",
            entry.name
        );
    }
    assert_eq!(contents.len(), 2);
}

#[test]
fn large_dataset_roundtrip() {
    let (_dir, path) = scratch_db();
    let rows: Vec<(i64, i64)> = (0..2_000).map(|i| (i, i * i)).collect();
    let ds = records(&rows);
    with_session(&path, |db| db.save_dataframe(&ds, "squares", "n and n^2", true)).unwrap();

    let db = CatalogDb::open(&path).unwrap();
    let read = db.get_table("squares").unwrap();
    assert_eq!(read.num_rows(), 2_000);
    assert_eq!(read, ds);
}
