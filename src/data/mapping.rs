//! Column mapping: rename/select source columns onto a target schema
//!
//! Each control type declares the semantic fields it needs
//! ([`crate::qc::ControlType::required_fields`]); the user maps arbitrary
//! source column names onto them, and [`ColumnMapping::apply`] produces a
//! table holding exactly the target columns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::table::Table;

/// Errors raised when a mapping cannot be applied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The mapping has no entries
    #[error("no columns mapped")]
    Empty,

    /// A mapped source column is absent from the table
    ///
    /// The field is named `source_column` on purpose: thiserror treats a field
    /// named `source` as the error's cause, which `String` cannot be.
    #[error("source column '{source_column}' (mapped to '{target}') not found in table")]
    MissingSource {
        target: String,
        source_column: String,
    },
}

/// Ordered (target, source) column pairs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    entries: Vec<(String, String)>,
}

impl ColumnMapping {
    /// Empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a target → source assignment, builder style
    pub fn with(mut self, target: impl Into<String>, source: impl Into<String>) -> Self {
        self.set(target, source);
        self
    }

    /// Add or replace a target → source assignment
    pub fn set(&mut self, target: impl Into<String>, source: impl Into<String>) {
        let target = target.into();
        let source = source.into();
        match self.entries.iter_mut().find(|(t, _)| *t == target) {
            Some(entry) => entry.1 = source,
            None => self.entries.push((target, source)),
        }
    }

    /// Source column currently assigned to a target, if any
    pub fn get(&self, target: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == target)
            .map(|(_, s)| s.as_str())
    }

    /// Whether no columns are mapped
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Produce a table whose columns are the mapped targets, in mapping order
    ///
    /// Every entry's source column must exist; row order is preserved.
    pub fn apply(&self, table: &Table) -> Result<Table, MappingError> {
        if self.entries.is_empty() {
            return Err(MappingError::Empty);
        }

        let mut indices = Vec::with_capacity(self.entries.len());
        for (target, source) in &self.entries {
            let idx = table
                .column_index(source)
                .ok_or_else(|| MappingError::MissingSource {
                    target: target.clone(),
                    source_column: source.clone(),
                })?;
            indices.push(idx);
        }

        let headers = self.entries.iter().map(|(t, _)| t.clone()).collect();
        let rows = table
            .rows()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(Table::new(headers, rows))
    }

    /// Propose a mapping by normalized column-name match
    ///
    /// A source column is assigned to a target when their normalized names
    /// (lowercased, non-alphanumeric runs collapsed to `_`) are equal, or
    /// failing that, when the source name contains the target name. Targets
    /// with no plausible source are left unmapped.
    pub fn suggest(targets: &[&str], table: &Table) -> Self {
        let normalized: Vec<String> = table.headers().iter().map(|h| normalize_id(h)).collect();

        let mut mapping = Self::new();
        for target in targets {
            let want = normalize_id(target);
            let found = normalized
                .iter()
                .position(|n| *n == want)
                .or_else(|| normalized.iter().position(|n| n.contains(&want)));
            if let Some(idx) = found {
                mapping.set(*target, table.headers()[idx].clone());
            }
        }
        mapping
    }
}

/// Lowercase a column name and collapse non-alphanumeric runs to `_`
pub(crate) fn normalize_id(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_sep = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
            last_sep = false;
        } else if !last_sep {
            out.push('_');
            last_sep = true;
        }
    }
    out.trim_matches('_').to_string()
}
