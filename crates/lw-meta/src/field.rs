//! Field definitions.

use std::fmt;
use std::sync::Arc;

use lw_codes::Edition;
use serde_json::Value;

use crate::MetaValue;
use crate::context::{Projection, lookup};
use crate::convert;

/// Value converter: raw field value plus the record being projected.
pub type Converter = Arc<dyn Fn(&Value, &Projection<'_>) -> Option<MetaValue> + Send + Sync>;

/// Which default schemas include a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultIn {
    /// Every edition.
    All,
    /// One edition only.
    Only(Edition),
    /// No default schema; available to explicit selections.
    None,
}

impl DefaultIn {
    #[must_use]
    pub fn includes(self, edition: Edition) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == edition,
            Self::None => false,
        }
    }
}

/// How one canonical metadata field is derived from a record.
#[derive(Clone)]
pub struct FieldDefinition {
    key: String,
    sources: Vec<String>,
    convert: Option<Converter>,
    drop_if_empty: bool,
    default_in: DefaultIn,
}

impl FieldDefinition {
    /// Field read from the record key of the same name.
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_owned(),
            sources: vec![key.to_owned()],
            convert: None,
            drop_if_empty: true,
            default_in: DefaultIn::All,
        }
    }

    /// Candidate record keys, highest priority first. Dotted paths reach into
    /// nested objects.
    ///
    /// An empty list hands the whole record to the converter.
    #[must_use]
    pub fn from_keys(mut self, sources: &[&str]) -> Self {
        self.sources = sources.iter().map(|s| (*s).to_owned()).collect();
        self
    }

    #[must_use]
    pub fn convert<F>(mut self, convert: F) -> Self
    where
        F: Fn(&Value, &Projection<'_>) -> Option<MetaValue> + Send + Sync + 'static,
    {
        self.convert = Some(Arc::new(convert));
        self
    }

    /// Emit the field even when the converted value is empty.
    #[must_use]
    pub fn keep_empty(mut self) -> Self {
        self.drop_if_empty = false;
        self
    }

    /// Only include the field in one edition's default schema.
    #[must_use]
    pub fn only(mut self, edition: Edition) -> Self {
        self.default_in = DefaultIn::Only(edition);
        self
    }

    /// Leave the field out of every default schema.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.default_in = DefaultIn::None;
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    #[must_use]
    pub fn default_in(&self) -> DefaultIn {
        self.default_in
    }

    /// Derive this field's value for one record.
    ///
    /// Total: returns `None` when no source key is present, when the converter
    /// declines the value, or when an empty value is dropped.
    #[must_use]
    pub fn resolve(&self, projection: &Projection<'_>) -> Option<MetaValue> {
        let raw = if self.sources.is_empty() {
            projection.record
        } else {
            self.sources
                .iter()
                .find_map(|key| lookup(projection.record, key))?
        };
        let value = match &self.convert {
            Some(convert) => convert(raw, projection)?,
            None => convert::identity(raw)?,
        };
        if self.drop_if_empty && value.is_empty() {
            return None;
        }
        Some(value)
    }
}

impl fmt::Debug for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("key", &self.key)
            .field("sources", &self.sources)
            .field("convert", &self.convert.as_ref().map(|_| "<fn>"))
            .field("drop_if_empty", &self.drop_if_empty)
            .field("default_in", &self.default_in)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ProjectionContext;

    #[test]
    fn test_first_present_source_wins() {
        let field = FieldDefinition::new("speed").from_keys(&["walk", "speed"]);
        let ctx = ProjectionContext::default();
        let record = json!({"walk": null, "speed": 30});
        assert_eq!(
            field.resolve(&Projection::new(&record, &ctx)),
            Some(MetaValue::Int(30))
        );
    }

    #[test]
    fn test_missing_sources_yield_nothing() {
        let field = FieldDefinition::new("speed");
        let ctx = ProjectionContext::default();
        assert_eq!(field.resolve(&Projection::new(&json!({}), &ctx)), None);
    }

    #[test]
    fn test_converter_sees_whole_record() {
        let field = FieldDefinition::new("label")
            .from_keys(&["name"])
            .convert(|raw, p| {
                let level = p.get("level")?.as_i64()?;
                Some(MetaValue::Str(format!("{} ({level})", raw.as_str()?)))
            });
        let ctx = ProjectionContext::default();
        let record = json!({"name": "Shield", "level": 1});
        assert_eq!(
            field.resolve(&Projection::new(&record, &ctx)),
            Some(MetaValue::from("Shield (1)"))
        );
    }

    #[test]
    fn test_empty_values_dropped_unless_kept() {
        let ctx = ProjectionContext::default();
        let record = json!({"tags": []});
        let projection = Projection::new(&record, &ctx);
        assert_eq!(FieldDefinition::new("tags").resolve(&projection), None);
        assert_eq!(
            FieldDefinition::new("tags").keep_empty().resolve(&projection),
            Some(MetaValue::List(Vec::new()))
        );
    }

    #[test]
    fn test_default_membership() {
        assert!(DefaultIn::All.includes(Edition::One));
        assert!(!DefaultIn::Only(Edition::Classic).includes(Edition::One));
        assert!(!DefaultIn::None.includes(Edition::Classic));
    }
}
