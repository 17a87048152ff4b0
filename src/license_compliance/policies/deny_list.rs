use crate::shared::error::AuditError;
use crate::shared::Result;

/// DenyList policy holding the license substrings that make a dependency a violation
///
/// Entries keep their configured order and are matched case-sensitively as
/// plain substrings of a license expression, so `GPL` flags `GPL-3.0`,
/// `LGPL-2.1` and `MIT OR GPL-2.0` alike.
///
/// A blank entry is rejected: the empty string is a substring of every
/// license and would flag the whole dependency tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenyList {
    entries: Vec<String>,
}

impl DenyList {
    /// Creates a deny-list from already separated entries
    ///
    /// # Errors
    /// Returns a validation error if any entry is empty or only whitespace.
    pub fn new(entries: Vec<String>) -> Result<Self> {
        if let Some(index) = entries.iter().position(|e| e.trim().is_empty()) {
            return Err(AuditError::Validation {
                message: format!("Deny-list entry #{} must not be empty", index + 1),
            }
            .into());
        }
        Ok(Self { entries })
    }

    /// Parses an action input list: entries separated by commas or newlines
    ///
    /// Surrounding whitespace is trimmed and empty items are dropped, which
    /// matches how workflow inputs like `licenses: GPL-3.0, AGPL` are written.
    pub fn parse(input: &str) -> Self {
        let entries = input
            .split(|c: char| c == ',' || c == '\n')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first entry contained in `license`, if any
    pub fn first_match(&self, license: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| license.contains(entry.as_str()))
            .map(String::as_str)
    }
}
