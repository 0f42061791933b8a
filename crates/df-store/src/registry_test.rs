use super::*;

fn db() -> CatalogDb {
    CatalogDb::open_memory().unwrap()
}

// ── Table of values ────────────────────────────────────────────────────

#[test]
fn add_value_then_get_value() {
    let db = db();
    let x = 1233.0123;
    db.add_value(
        "my-value",
        "this is a random value that I just made up",
        x,
        "float",
        true,
    )
    .unwrap();

    let entry = db.get_value("my-value").unwrap().unwrap();
    assert!((entry.value - x).abs() < 1e-6);
    assert_eq!(entry.value_type, "float");
    assert_eq!(
        entry.description,
        "this is a random value that I just made up"
    );
}

#[test]
fn get_value_missing_is_none() {
    assert!(db().get_value("nope").unwrap().is_none());
}

#[test]
fn add_value_overwrite_replaces() {
    let db = db();
    db.add_value("k", "first", 1.0, "int", true).unwrap();
    db.add_value("k", "second", 2.5, "float", true).unwrap();

    let values = db.list_values().unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].description, "second");
    assert_eq!(values[0].value, 2.5);
    assert_eq!(values[0].value_type, "float");
}

#[test]
fn add_value_without_overwrite_rejects_duplicate() {
    let db = db();
    db.add_value("k", "first", 1.0, "int", true).unwrap();
    let err = db.add_value("k", "second", 2.0, "int", false).unwrap_err();
    assert!(
        matches!(err, StoreError::DuplicateKey { registry: "tov", ref name } if name == "k"),
        "got {err:?}"
    );

    let entry = db.get_value("k").unwrap().unwrap();
    assert_eq!(entry.description, "first");
    assert_eq!(entry.value, 1.0);
}

#[test]
fn add_value_without_overwrite_inserts_new_name() {
    let db = db();
    db.add_value("k", "d", 7.0, "int", false).unwrap();
    assert_eq!(db.get_value("k").unwrap().unwrap().value, 7.0);
}

#[test]
fn add_value_type_tag_is_free_form() {
    let db = db();
    db.add_value("ratio", "d", 0.25, "percentage (of total)", true)
        .unwrap();
    assert_eq!(
        db.get_value("ratio").unwrap().unwrap().value_type,
        "percentage (of total)"
    );
}

#[test]
fn add_value_rejects_empty_name() {
    let err = db().add_value("", "d", 1.0, "float", true).unwrap_err();
    assert!(matches!(err, StoreError::InvalidArgument(_)));
}

#[test]
fn add_value_rejects_overlong_name() {
    let name = "v".repeat(MAX_VALUE_NAME_LEN + 1);
    let err = db().add_value(&name, "d", 1.0, "float", true).unwrap_err();
    assert!(matches!(err, StoreError::InvalidArgument(_)));
}

#[test]
fn value_names_are_data_not_identifiers() {
    let db = db();
    let name = "x'); DROP TABLE toc; --";
    db.add_value(name, "d", 3.0, "float", true).unwrap();
    assert!(db.get_value(name).unwrap().is_some());
    assert!(db.table_exists("toc").unwrap());
}

#[test]
fn remove_value_deletes_entry() {
    let db = db();
    db.add_value("my-value", "d", 1233.0123, "float", true)
        .unwrap();
    assert!(db.remove_value("my-value").unwrap());
    assert!(db.get_value("my-value").unwrap().is_none());
    assert!(db.list_values().unwrap().is_empty());
}

#[test]
fn remove_value_missing_is_noop() {
    let db = db();
    assert!(!db.remove_value("never-added").unwrap());
}

#[test]
fn list_values_sorted_by_name() {
    let db = db();
    for name in ["gamma", "alpha", "beta"] {
        db.add_value(name, "d", 1.0, "float", true).unwrap();
    }
    let names: Vec<String> = db.list_values().unwrap().into_iter().map(|v| v.name).collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn null_value_reads_as_nan() {
    let db = db();
    db.conn()
        .unwrap()
        .execute("INSERT INTO tov VALUES ('n', NULL, NULL, NULL)", [])
        .unwrap();
    let entry = db.get_value("n").unwrap().unwrap();
    assert!(entry.value.is_nan());
    assert_eq!(entry.description, "");
    assert_eq!(entry.value_type, "");
}

#[test]
fn value_entry_serializes_type_field() {
    let entry = ValueEntry {
        name: "k".to_string(),
        description: "d".to_string(),
        value: 1.5,
        value_type: "float".to_string(),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["type"], "float");
    assert_eq!(json["value"], 1.5);
}

// ── Table of contents ──────────────────────────────────────────────────

#[test]
fn register_content_without_overwrite_maps_constraint_violation() {
    let db = db();
    let conn = db.conn().unwrap();
    register_content(conn, "t", "first", false).unwrap();
    let err = register_content(conn, "t", "second", false).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey { registry: "toc", .. }));
}

#[test]
fn register_content_overwrite_replaces_case_variants() {
    let db = db();
    let conn = db.conn().unwrap();
    register_content(conn, "Sales", "old", true).unwrap();
    register_content(conn, "sales", "new", true).unwrap();

    let contents = db.list_contents().unwrap();
    assert_eq!(
        contents,
        vec![TocEntry {
            name: "sales".to_string(),
            description: "new".to_string()
        }]
    );
}

#[test]
fn content_exists_ignores_case() {
    let db = db();
    let conn = db.conn().unwrap();
    register_content(conn, "Orders", "d", true).unwrap();
    assert!(content_exists(conn, "orders").unwrap());
    assert!(content_exists(conn, "ORDERS").unwrap());
    assert!(!content_exists(conn, "order").unwrap());
}

#[test]
fn get_content_exact_name() {
    let db = db();
    register_content(db.conn().unwrap(), "table1", "desc", true).unwrap();
    assert_eq!(
        db.get_content("table1").unwrap().unwrap().description,
        "desc"
    );
    assert!(db.get_content("table2").unwrap().is_none());
}
