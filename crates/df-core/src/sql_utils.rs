//! SQL identifier quoting utilities
//!
//! Table and column names are always spliced into DDL/DML through
//! [`quote_ident`]; values are always bound as statement parameters.

/// Quote a SQL identifier to prevent injection.
///
/// Wraps the identifier in double quotes and escapes any embedded double quotes
/// by doubling them, following the SQL standard.
///
/// # Examples
/// ```
/// use df_core::sql_utils::quote_ident;
/// assert_eq!(quote_ident("toc"), r#""toc""#);
/// assert_eq!(quote_ident(r#"my"col"#), r#""my""col""#);
/// ```
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Build a `(?, ?, ...)` placeholder group for `n` parameters.
pub fn placeholders(n: usize) -> String {
    format!("({})", vec!["?"; n].join(", "))
}
