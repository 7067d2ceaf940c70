//! Projection context.

use std::collections::BTreeMap;

use lw_codes::{Edition, expand_source};
use serde_json::Value;

/// Extra source-code expansions, checked before the built-in table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceNames {
    names: BTreeMap<String, String>,
}

impl SourceNames {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expansion. Codes match without regard to ASCII case.
    pub fn insert(&mut self, code: &str, name: impl Into<String>) {
        self.names.insert(code.trim().to_ascii_uppercase(), name.into());
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&str> {
        self.names
            .get(&code.trim().to_ascii_uppercase())
            .map(String::as_str)
    }

    /// Full name for `code`: configured name, then the built-in table, then
    /// the code itself.
    #[must_use]
    pub fn expand(&self, code: &str, edition: Edition) -> String {
        if let Some(name) = self.get(code) {
            return name.to_owned();
        }
        expand_source(code, edition).unwrap_or_else(|| code.trim().to_owned())
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for SourceNames {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut names = Self::new();
        for (code, name) in iter {
            names.insert(code.as_ref(), name);
        }
        names
    }
}

/// Batch-wide parameters for projection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectionContext {
    /// Ruleset the batch belongs to.
    pub edition: Edition,
    pub sources: SourceNames,
}

impl ProjectionContext {
    #[must_use]
    pub fn new(edition: Edition) -> Self {
        Self {
            edition,
            sources: SourceNames::new(),
        }
    }

    #[must_use]
    pub fn with_sources(mut self, sources: SourceNames) -> Self {
        self.sources = sources;
        self
    }
}

/// One record being projected, with its context.
///
/// Converters receive this alongside the raw field value so they can look at
/// sibling fields without the record ever being modified.
#[derive(Clone, Copy, Debug)]
pub struct Projection<'a> {
    pub record: &'a Value,
    pub context: &'a ProjectionContext,
    /// Source collection the record was read from (`"variantrule"`), when the
    /// kind spans several.
    pub collection: Option<&'a str>,
}

impl<'a> Projection<'a> {
    #[must_use]
    pub fn new(record: &'a Value, context: &'a ProjectionContext) -> Self {
        Self {
            record,
            context,
            collection: None,
        }
    }

    #[must_use]
    pub fn with_collection(mut self, collection: &'a str) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Field of the record by dotted path (`"hp.average"`).
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&'a Value> {
        lookup(self.record, path)
    }

    /// Edition used for source-name expansion.
    ///
    /// A record's own `edition` field wins over the batch edition.
    #[must_use]
    pub fn source_edition(&self) -> Edition {
        self.record
            .get("edition")
            .and_then(Value::as_str)
            .and_then(Edition::from_id)
            .unwrap_or(self.context.edition)
    }

    /// Expand a source code for this record.
    #[must_use]
    pub fn expand_source(&self, code: &str) -> String {
        self.context.sources.expand(code, self.source_edition())
    }
}

/// Look up a dotted path, skipping `null` values.
pub(crate) fn lookup<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for part in path.split('.') {
        current = current.get(part)?;
    }
    (!current.is_null()).then_some(current)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_lookup_paths() {
        let record = json!({"hp": {"average": 58}, "ac": null});
        assert_eq!(lookup(&record, "hp.average"), Some(&json!(58)));
        assert_eq!(lookup(&record, "ac"), None);
        assert_eq!(lookup(&record, "hp.formula"), None);
    }

    #[test]
    fn test_record_edition_overrides_source_expansion() {
        let ctx = ProjectionContext::new(Edition::Classic);
        let record = json!({"edition": "one", "source": "SRD"});
        let projection = Projection::new(&record, &ctx);
        assert_eq!(projection.source_edition(), Edition::One);
        assert_eq!(projection.expand_source("SRD"), "System Reference Document 5.2");
    }

    #[test]
    fn test_configured_names_win() {
        let sources: SourceNames = [("hb", "Homebrew Compendium"), ("PHB", "My Handbook")]
            .into_iter()
            .collect();
        assert_eq!(sources.expand("HB", Edition::Classic), "Homebrew Compendium");
        assert_eq!(sources.expand("phb", Edition::Classic), "My Handbook");
        assert_eq!(sources.expand("XGE", Edition::Classic), "Xanathar's Guide to Everything");
        assert_eq!(sources.expand("ZZZ", Edition::Classic), "ZZZ");
    }
}
