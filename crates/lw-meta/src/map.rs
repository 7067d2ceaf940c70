//! Ordered metadata maps.

use crate::MetaValue;

/// Ordered `key -> value` metadata.
///
/// Keys keep insertion order. Re-inserting an existing key replaces its value
/// in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetadataMap {
    entries: Vec<(String, MetaValue)>,
}

impl MetadataMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the end, or replace the value of an existing key.
    pub fn append(&mut self, key: &str, value: impl Into<MetaValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_owned(), value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(MetaValue::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as `key: value` lines, without delimiters.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(key);
            out.push_str(": ");
            value.write_to(&mut out);
        }
        out
    }
}
