//! Strongly-typed, validated table name wrapper.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Longest accepted table name, matching the `toc.name VARCHAR(255)` column.
pub const MAX_TABLE_NAME_LEN: usize = 255;

/// Names of the two registry tables. Datasets may not be saved under them.
pub const RESERVED_TABLE_NAMES: &[&str] = &["toc", "tov"];

/// Strongly-typed wrapper for dataset table names.
///
/// A `TableName` is always a plain SQL identifier: it starts with an ASCII
/// letter or underscore, continues with ASCII alphanumerics or underscores,
/// and is at most [`MAX_TABLE_NAME_LEN`] characters long. Like DuckDB
/// identifiers, two names that differ only by case refer to the same table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableName(String);

impl TableName {
    /// Validate `name` and wrap it.
    pub fn parse(name: impl Into<String>) -> CoreResult<Self> {
        let s = name.into();
        validate(&s)?;
        Ok(Self(s))
    }

    /// Return the underlying name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether this is one of the registry tables (`toc`, `tov`).
    pub fn is_reserved(&self) -> bool {
        RESERVED_TABLE_NAMES.iter().any(|r| self.matches(r))
    }

    /// Case-insensitive comparison, following DuckDB identifier semantics.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

fn validate(name: &str) -> CoreResult<()> {
    let invalid = |reason: &str| CoreError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(invalid("table name must not be empty"));
    };
    if name.len() > MAX_TABLE_NAME_LEN {
        return Err(invalid("table name is longer than 255 characters"));
    }
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(invalid(
            "table name must start with an ASCII letter or underscore",
        ));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid(
            "table name may only contain ASCII letters, digits, and underscores",
        ));
    }
    Ok(())
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for TableName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TableName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TableName {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TableName {
    type Error = CoreError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<TableName> for String {
    fn from(name: TableName) -> Self {
        name.0
    }
}

impl PartialEq<str> for TableName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TableName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for TableName {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_creation() {
        let name = TableName::parse("table1").unwrap();
        assert_eq!(name.as_str(), "table1");
        assert_eq!(name, "table1");
    }

    #[test]
    fn test_table_name_display() {
        let name = TableName::parse("sales_2024").unwrap();
        assert_eq!(format!("{}", name), "sales_2024");
    }

    #[test]
    fn test_table_name_leading_underscore() {
        assert!(TableName::parse("_staging").is_ok());
    }

    #[test]
    fn test_table_name_rejects_empty() {
        let err = TableName::parse("").unwrap_err();
        assert!(matches!(err, CoreError::InvalidName { .. }));
    }

    #[test]
    fn test_table_name_rejects_leading_digit() {
        assert!(TableName::parse("1table").is_err());
    }

    #[test]
    fn test_table_name_rejects_unsafe_characters() {
        for bad in ["my-table", "a b", "x;DROP TABLE toc", "t\"", "schema.table", "tablé"] {
            assert!(TableName::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_table_name_length_limit() {
        let ok = "a".repeat(MAX_TABLE_NAME_LEN);
        assert!(TableName::parse(ok).is_ok());
        let too_long = "a".repeat(MAX_TABLE_NAME_LEN + 1);
        assert!(TableName::parse(too_long).is_err());
    }

    #[test]
    fn test_table_name_reserved() {
        assert!(TableName::parse("toc").unwrap().is_reserved());
        assert!(TableName::parse("TOV").unwrap().is_reserved());
        assert!(!TableName::parse("toc2").unwrap().is_reserved());
    }

    #[test]
    fn test_table_name_matches_ignores_case() {
        let name = TableName::parse("Sales").unwrap();
        assert!(name.matches("sales"));
        assert!(name.matches("SALES"));
        assert!(!name.matches("sale"));
    }

    #[test]
    fn test_table_name_try_from() {
        let name: TableName = "orders".try_into().unwrap();
        assert_eq!(name.into_inner(), "orders");
        let err: Result<TableName, _> = String::from("no way").try_into();
        assert!(err.is_err());
    }

    #[test]
    fn test_table_name_serde_roundtrip() {
        let name = TableName::parse("orders").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#""orders""#);
        let deserialized: TableName = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, name);
    }

    #[test]
    fn test_table_name_deserialize_rejects_invalid() {
        let result: Result<TableName, _> = serde_json::from_str(r#""bad name""#);
        assert!(result.is_err());
    }
}
