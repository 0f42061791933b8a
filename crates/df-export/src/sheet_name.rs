//! Excel sheet-name rules.
//!
//! A sheet name is 1-31 characters, contains none of `[ ] : * ? / \`, does
//! not start or end with an apostrophe, is not `History`, and is unique
//! within the workbook ignoring case.

use crate::error::{ExportError, ExportResult};
use df_core::SheetNamePolicy;
use std::collections::HashSet;

/// Longest sheet name Excel accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;

const FORBIDDEN_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Name used when sanitizing leaves nothing behind.
const FALLBACK_SHEET_NAME: &str = "Sheet";

/// Check `name` against the sheet-name rules, returning the reason it fails.
pub fn validate_sheet_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("sheet name must not be empty".to_string());
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(format!(
            "sheet name is longer than {MAX_SHEET_NAME_LEN} characters"
        ));
    }
    if let Some(c) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        return Err(format!("sheet name contains forbidden character '{c}'"));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err("sheet name must not start or end with an apostrophe".to_string());
    }
    if name.eq_ignore_ascii_case("history") {
        return Err("'History' is reserved by Excel".to_string());
    }
    Ok(())
}

/// Turn any string into a valid (but not necessarily unique) sheet name.
pub fn sanitize_sheet_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let truncated: String = replaced
        .trim_matches('\'')
        .chars()
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    let trimmed = truncated.trim_end_matches('\'');
    if trimmed.is_empty() {
        FALLBACK_SHEET_NAME.to_string()
    } else if trimmed.eq_ignore_ascii_case("history") {
        format!("{trimmed}_")
    } else {
        trimmed.to_string()
    }
}

/// Assigns one sheet name per table for a single workbook.
pub struct SheetNamer {
    policy: SheetNamePolicy,
    used: HashSet<String>,
}

impl SheetNamer {
    pub fn new(policy: SheetNamePolicy) -> Self {
        Self {
            policy,
            used: HashSet::new(),
        }
    }

    /// Pick the sheet name for `table`.
    ///
    /// `Strict` accepts the table name as-is or fails; `Truncate` sanitizes
    /// it and appends `~N` until it no longer collides.
    pub fn assign(&mut self, table: &str) -> ExportResult<String> {
        let name = match self.policy {
            SheetNamePolicy::Strict => {
                validate_sheet_name(table).map_err(|reason| ExportError::InvalidSheetName {
                    name: table.to_string(),
                    reason,
                })?;
                if self.used.contains(&table.to_lowercase()) {
                    return Err(ExportError::InvalidSheetName {
                        name: table.to_string(),
                        reason: "another table already uses this sheet name".to_string(),
                    });
                }
                table.to_string()
            }
            SheetNamePolicy::Truncate => {
                let name = self.dedupe(sanitize_sheet_name(table));
                if name != table {
                    log::warn!("Table {table} exported as sheet '{name}'");
                }
                name
            }
        };
        self.used.insert(name.to_lowercase());
        Ok(name)
    }

    fn dedupe(&self, base: String) -> String {
        if !self.used.contains(&base.to_lowercase()) {
            return base;
        }
        let mut n = 1;
        loop {
            let suffix = format!("~{n}");
            let keep = MAX_SHEET_NAME_LEN - suffix.chars().count();
            let stem: String = base.chars().take(keep).collect();
            let candidate = format!("{stem}{suffix}");
            if !self.used.contains(&candidate.to_lowercase()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
#[path = "sheet_name_test.rs"]
mod tests;
