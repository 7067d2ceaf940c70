use lw_codes::{DamageType, ItemProperty, ItemType, Rarity, strip_source_suffix};
use lw_tags::title_case;
use serde_json::Value;

use crate::convert::{self, format_value, text, value_in_gold};
use crate::{FieldCatalog, FieldDefinition, MetaValue, Projection};

pub fn item() -> FieldCatalog {
    FieldCatalog::new("item")
        .field(FieldDefinition::new("name"))
        .field(
            FieldDefinition::new("type")
                .from_keys(&["type", "wondrous"])
                .convert(item_type),
        )
        .field(FieldDefinition::new("rarity").convert(rarity))
        .field(
            FieldDefinition::new("attunement")
                .from_keys(&["reqAttune"])
                .convert(attunement),
        )
        .field(
            FieldDefinition::new("weight")
                .convert(|raw, _| raw.as_f64().map(MetaValue::number)),
        )
        .field(
            FieldDefinition::new("value")
                .convert(|raw, _| raw.as_f64().map(|cp| MetaValue::Str(format_value(cp)))),
        )
        .field(
            FieldDefinition::new("value_gp")
                .from_keys(&["value"])
                .convert(|raw, _| raw.as_f64().map(value_in_gold)),
        )
        .field(
            FieldDefinition::new("damage")
                .from_keys(&["dmg1"])
                .convert(damage),
        )
        .field(
            FieldDefinition::new("properties")
                .from_keys(&["property"])
                .convert(properties),
        )
        .field(FieldDefinition::new("ac").convert(convert::integer))
        .field(
            FieldDefinition::new("weapon_category")
                .from_keys(&["weaponCategory"])
                .convert(convert::title_text),
        )
        .field(
            FieldDefinition::new("sources")
                .from_keys(&["source"])
                .convert(convert::sources),
        )
}

fn item_type(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    match raw {
        Value::String(code) => {
            let name = ItemType::from_code(code)
                .map_or_else(|| strip_source_suffix(code).to_owned(), |t| t.name().to_owned());
            Some(MetaValue::Str(name))
        }
        Value::Bool(true) => Some(MetaValue::from("Wondrous Item")),
        _ => None,
    }
}

fn rarity(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let code = raw.as_str()?;
    let name = Rarity::from_code(code).map_or_else(|| title_case(code), |r| r.name().to_owned());
    Some(MetaValue::Str(name))
}

fn attunement(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    match raw {
        Value::Bool(b) => Some(MetaValue::Bool(*b)),
        other => text(other).map(MetaValue::Str),
    }
}

/// `1d8 slashing (versatile 1d10)`.
fn damage(raw: &Value, projection: &Projection<'_>) -> Option<MetaValue> {
    let mut out = text(raw)?;
    if let Some(kind) = projection
        .get("dmgType")
        .and_then(Value::as_str)
        .and_then(DamageType::from_code)
    {
        out.push(' ');
        out.push_str(kind.name());
    }
    if let Some(versatile) = projection.get("dmg2").and_then(text) {
        out.push_str(" (versatile ");
        out.push_str(&versatile);
        out.push(')');
    }
    Some(MetaValue::Str(out))
}

fn properties(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let list = raw
        .as_array()?
        .iter()
        .filter_map(|p| match p {
            Value::String(s) => Some(s.as_str()),
            Value::Object(obj) => obj.get("uid").and_then(Value::as_str),
            _ => None,
        })
        .map(|code| {
            ItemProperty::from_code(code)
                .map_or_else(|| strip_source_suffix(code).to_owned(), |p| p.name().to_owned())
        })
        .collect();
    Some(MetaValue::List(list))
}

#[cfg(test)]
mod tests {
    use lw_codes::Edition;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::ProjectionContext;

    fn project(record: &Value) -> crate::MetadataMap {
        item()
            .default_schema(Edition::One)
            .project_record(record, &ProjectionContext::new(Edition::One))
    }

    #[test]
    fn test_weapon() {
        let map = project(&json!({
            "name": "Longsword",
            "source": "XPHB",
            "type": "M|XPHB",
            "rarity": "none",
            "weight": 3,
            "value": 1500,
            "weaponCategory": "martial",
            "property": ["V|XPHB"],
            "dmg1": "1d8",
            "dmgType": "S",
            "dmg2": "1d10"
        }));
        assert_eq!(
            map.serialize(),
            "name: \"Longsword\"\n\
             type: \"Melee Weapon\"\n\
             rarity: \"Mundane\"\n\
             weight: 3\n\
             value: \"15 gp\"\n\
             value_gp: 15\n\
             damage: \"1d8 slashing (versatile 1d10)\"\n\
             properties: [\"Versatile\"]\n\
             weapon_category: \"Martial\"\n\
             sources: [\"Player's Handbook (2024)\"]"
        );
    }

    #[test]
    fn test_wondrous_item() {
        let map = project(&json!({
            "name": "Bag of Holding",
            "wondrous": true,
            "rarity": "uncommon",
            "reqAttune": false,
            "weight": 15
        }));
        assert_eq!(map.get_str("type"), Some("Wondrous Item"));
        assert_eq!(map.get_str("rarity"), Some("Uncommon"));
        assert_eq!(map.get("attunement"), Some(&MetaValue::Bool(false)));
    }

    #[test]
    fn test_attunement_text_and_small_values() {
        let map = project(&json!({
            "name": "Holy Avenger",
            "reqAttune": "by a paladin",
            "value": 5
        }));
        assert_eq!(map.get_str("attunement"), Some("by a paladin"));
        assert_eq!(map.get_str("value"), Some("5 cp"));
        assert_eq!(map.get("value_gp"), Some(&MetaValue::Float(0.05)));
    }
}
