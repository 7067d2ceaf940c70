//! Field catalogs and schemas.

use lw_codes::Edition;

use crate::context::{Projection, ProjectionContext};
use crate::{FieldDefinition, MetadataMap};

/// Error building a schema from field keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Requested key has no definition in the catalog.
    #[error("unknown {kind} field `{key}` (known fields: {known})")]
    UnknownField {
        kind: String,
        key: String,
        known: String,
    },
    /// Key requested more than once.
    #[error("duplicate {kind} field `{key}`")]
    DuplicateField { kind: String, key: String },
}

/// Every field a content kind knows how to derive, in canonical order.
#[derive(Clone, Debug)]
pub struct FieldCatalog {
    kind: &'static str,
    fields: Vec<FieldDefinition>,
}

impl FieldCatalog {
    #[must_use]
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    /// Add a definition. Later definitions with the same key are ignored by
    /// lookups, so catalogs should declare each key once.
    #[must_use]
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.key() == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldDefinition::key)
    }

    /// Schema of the fields included by default for `edition`.
    #[must_use]
    pub fn default_schema(&self, edition: Edition) -> FieldSchema {
        FieldSchema {
            kind: self.kind,
            fields: self
                .fields
                .iter()
                .filter(|f| f.default_in().includes(edition))
                .cloned()
                .collect(),
        }
    }

    /// Schema of exactly `keys`, in the given order.
    ///
    /// Fails on a key the catalog does not define, or on a repeated key.
    pub fn select<S: AsRef<str>>(&self, keys: &[S]) -> Result<FieldSchema, SchemaError> {
        let mut fields: Vec<FieldDefinition> = Vec::with_capacity(keys.len());
        for key in keys {
            let key = key.as_ref();
            if fields.iter().any(|f| f.key() == key) {
                return Err(SchemaError::DuplicateField {
                    kind: self.kind.to_owned(),
                    key: key.to_owned(),
                });
            }
            let field = self.get(key).ok_or_else(|| SchemaError::UnknownField {
                kind: self.kind.to_owned(),
                key: key.to_owned(),
                known: self.keys().collect::<Vec<_>>().join(", "),
            })?;
            fields.push(field.clone());
        }
        Ok(FieldSchema {
            kind: self.kind,
            fields,
        })
    }
}

/// Ordered list of field definitions applied to records of one kind.
#[derive(Clone, Debug)]
pub struct FieldSchema {
    kind: &'static str,
    fields: Vec<FieldDefinition>,
}

impl FieldSchema {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldDefinition::key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Project a record onto this schema.
    ///
    /// Fields appear in schema order; fields without a value are left out.
    #[must_use]
    pub fn project(&self, projection: &Projection<'_>) -> MetadataMap {
        let mut map = MetadataMap::new();
        for field in &self.fields {
            if let Some(value) = field.resolve(projection) {
                map.append(field.key(), value);
            }
        }
        map
    }

    /// Shorthand for projecting a record with no collection.
    #[must_use]
    pub fn project_record(
        &self,
        record: &serde_json::Value,
        context: &ProjectionContext,
    ) -> MetadataMap {
        self.project(&Projection::new(record, context))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::MetaValue;

    fn catalog() -> FieldCatalog {
        FieldCatalog::new("test")
            .field(FieldDefinition::new("name"))
            .field(FieldDefinition::new("level"))
            .field(FieldDefinition::new("save").only(Edition::Classic))
            .field(FieldDefinition::new("notes").optional())
    }

    #[test]
    fn test_default_schema_by_edition() {
        let catalog = catalog();
        assert_eq!(
            catalog.default_schema(Edition::Classic).keys().collect::<Vec<_>>(),
            vec!["name", "level", "save"]
        );
        assert_eq!(
            catalog.default_schema(Edition::One).keys().collect::<Vec<_>>(),
            vec!["name", "level"]
        );
    }

    #[test]
    fn test_select_keeps_requested_order() {
        let schema = catalog().select(&["level", "notes", "name"]).unwrap();
        assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["level", "notes", "name"]);
    }

    #[test]
    fn test_select_unknown_key_fails() {
        let err = catalog().select(&["name", "colour"]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownField {
                kind: "test".to_owned(),
                key: "colour".to_owned(),
                known: "name, level, save, notes".to_owned(),
            }
        );
    }

    #[test]
    fn test_select_duplicate_key_fails() {
        let err = catalog().select(&["name", "name"]).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { .. }));
    }

    #[test]
    fn test_project_in_schema_order() {
        let schema = catalog().select(&["level", "name"]).unwrap();
        let map = schema.project_record(
            &json!({"name": "Shield", "level": 1, "save": ["dex"]}),
            &ProjectionContext::default(),
        );
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["level", "name"]);
        assert_eq!(map.get("level"), Some(&MetaValue::Int(1)));
    }
}
