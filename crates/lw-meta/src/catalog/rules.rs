use serde_json::Value;

use crate::convert;
use crate::{FieldCatalog, FieldDefinition, MetaValue, Projection};

pub fn rules() -> FieldCatalog {
    FieldCatalog::new("rules")
        .field(FieldDefinition::new("name"))
        .field(
            FieldDefinition::new("rule_type")
                .from_keys(&["ruleType"])
                .convert(rule_type),
        )
        .field(
            FieldDefinition::new("collection")
                .from_keys(&[])
                .convert(|_, projection| {
                    projection
                        .collection
                        .and_then(collection_label)
                        .map(MetaValue::from)
                }),
        )
        .field(
            FieldDefinition::new("sources")
                .from_keys(&["source"])
                .convert(convert::sources),
        )
}

/// Display label of a rules collection.
#[must_use]
pub fn collection_label(collection: &str) -> Option<&'static str> {
    match collection {
        "variantrule" => Some("Variant Rules"),
        "condition" => Some("Conditions"),
        "disease" => Some("Diseases"),
        "status" => Some("Statuses"),
        "action" => Some("Actions"),
        _ => None,
    }
}

fn rule_type(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let label = match raw.as_str()? {
        "C" => "Core",
        "O" => "Optional",
        "P" => "Prerelease",
        "V" => "Variant",
        "VO" => "Variant Optional",
        "VV" => "Variant Variant",
        "U" => "Unknown",
        other => return Some(MetaValue::from(other)),
    };
    Some(MetaValue::from(label))
}

#[cfg(test)]
mod tests {
    use lw_codes::Edition;
    use serde_json::json;

    use super::*;
    use crate::ProjectionContext;

    #[test]
    fn test_collection_comes_from_projection() {
        let record = json!({"name": "Flanking", "source": "DMG", "ruleType": "O"});
        let ctx = ProjectionContext::default();
        let projection = Projection::new(&record, &ctx).with_collection("variantrule");
        let map = rules().default_schema(Edition::Classic).project(&projection);
        assert_eq!(map.get_str("rule_type"), Some("Optional"));
        assert_eq!(map.get_str("collection"), Some("Variant Rules"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["name", "rule_type", "collection", "sources"]);
    }

    #[test]
    fn test_unknown_collection_is_omitted() {
        let record = json!({"name": "Blinded"});
        let ctx = ProjectionContext::default();
        let map = rules().default_schema(Edition::Classic).project(&Projection::new(&record, &ctx));
        assert!(!map.contains_key("collection"));
    }
}
