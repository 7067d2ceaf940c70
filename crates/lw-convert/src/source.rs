//! Reading records out of a parsed source file.

use serde_json::Value;

use crate::ContentKind;

/// One record together with the collection it was read from.
#[derive(Clone, Copy, Debug)]
pub struct SourceRecord<'a> {
    pub value: &'a Value,
    /// Top-level key of the source file; `None` for bare arrays and single
    /// records.
    pub collection: Option<&'static str>,
}

/// A parsed source file.
///
/// Accepts the usual `{ "<collection>": [records...] }` layout, a bare array
/// of records, or a single record object.
#[derive(Clone, Copy, Debug)]
pub struct SourceFile<'a> {
    root: &'a Value,
}

impl<'a> SourceFile<'a> {
    #[must_use]
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// Records of `kind`, in file order.
    #[must_use]
    pub fn records(&self, kind: ContentKind) -> Vec<SourceRecord<'a>> {
        match self.root {
            Value::Array(items) => items
                .iter()
                .map(|value| SourceRecord {
                    value,
                    collection: None,
                })
                .collect(),
            Value::Object(map) => {
                let mut records = Vec::new();
                for &collection in kind.collections() {
                    if let Some(Value::Array(items)) = map.get(collection) {
                        records.extend(items.iter().map(|value| SourceRecord {
                            value,
                            collection: Some(collection),
                        }));
                    }
                }
                if records.is_empty() && map.contains_key("name") {
                    records.push(SourceRecord {
                        value: self.root,
                        collection: None,
                    });
                }
                records
            }
            _ => Vec::new(),
        }
    }

    /// Every entry of the top-level array `key`; empty when absent.
    #[must_use]
    pub fn collection(&self, key: &str) -> &'a [Value] {
        match self.root.get(key) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }
}
