//! Conversions between dataset cells and DuckDB values.

use df_core::{ColumnType, Value};
use duckdb::types::Value as DuckValue;

/// Read column `idx` of `row` as a dataset cell of type `ty`.
///
/// The SELECT list built by [`crate::query::read_table`] casts every column
/// to the DuckDB type matching `ty`, so the typed getters always apply.
pub(crate) fn read_value(
    row: &duckdb::Row<'_>,
    idx: usize,
    ty: ColumnType,
) -> duckdb::Result<Value> {
    let value = match ty {
        ColumnType::Boolean => row.get::<_, Option<bool>>(idx)?.map(Value::Boolean),
        ColumnType::Integer => row.get::<_, Option<i64>>(idx)?.map(Value::Integer),
        ColumnType::Double => row.get::<_, Option<f64>>(idx)?.map(Value::Double),
        ColumnType::Text => row.get::<_, Option<String>>(idx)?.map(Value::Text),
    };
    Ok(value.unwrap_or(Value::Null))
}

/// Convert a dataset cell into a bindable DuckDB parameter.
pub(crate) fn to_duck_value(value: &Value) -> DuckValue {
    match value {
        Value::Null => DuckValue::Null,
        Value::Boolean(b) => DuckValue::Boolean(*b),
        Value::Integer(n) => DuckValue::BigInt(*n),
        Value::Double(x) => DuckValue::Double(*x),
        Value::Text(s) => DuckValue::Text(s.clone()),
    }
}

/// SELECT-list expression reading `quoted` column as `ty`.
pub(crate) fn select_expr(quoted: &str, ty: ColumnType) -> String {
    match ty {
        ColumnType::Boolean => quoted.to_string(),
        _ => format!("CAST({quoted} AS {}) AS {quoted}", ty.sql_type()),
    }
}
