use super::*;
use df_core::{Column, ColumnType};

fn sample() -> Dataset {
    Dataset::from_rows(
        vec![
            Column::new("id", ColumnType::Integer),
            Column::new("label", ColumnType::Text),
        ],
        vec![
            vec![1.into(), "a".into()],
            vec![2.into(), Value::Null],
        ],
    )
    .unwrap()
}

#[test]
fn json_records_keys_rows_by_column() {
    let records = json_records(&sample(), 2);
    assert_eq!(
        records,
        vec![
            serde_json::json!({"id": 1, "label": "a"}),
            serde_json::json!({"id": 2, "label": null}),
        ]
    );
}

#[test]
fn json_records_respects_limit() {
    assert_eq!(json_records(&sample(), 1).len(), 1);
    assert!(json_records(&sample(), 0).is_empty());
}
