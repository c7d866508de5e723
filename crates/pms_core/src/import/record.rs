//! Header-driven source row.

use std::collections::HashMap;

/// One row of named string fields.
///
/// Values are trimmed on insertion; reading an absent field yields `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRecord {
    fields: HashMap<String, String>,
}

impl SourceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for in-memory sources and tests.
    pub fn with_field(mut self, name: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl AsRef<str>) {
        let name = name.into().trim().to_string();
        self.fields.insert(name, value.as_ref().trim().to_string());
    }

    /// Trimmed field value, or `""` when the field is absent.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }
}

impl<K, V> FromIterator<(K, V)> for SourceRecord
where
    K: Into<String>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}
