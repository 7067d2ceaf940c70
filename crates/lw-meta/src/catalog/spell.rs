use lw_codes::{DamageType, Edition, School};
use lw_tags::title_case;
use serde_json::Value;

use crate::convert::{self, text};
use crate::{FieldCatalog, FieldDefinition, MetaValue, Projection};

pub fn spell() -> FieldCatalog {
    FieldCatalog::new("spell")
        .field(FieldDefinition::new("name"))
        .field(FieldDefinition::new("level").convert(convert::integer))
        .field(FieldDefinition::new("school").convert(school))
        .field(
            FieldDefinition::new("casting_time")
                .from_keys(&["time"])
                .convert(casting_time),
        )
        .field(FieldDefinition::new("range").convert(range))
        .field(FieldDefinition::new("components").convert(components))
        .field(
            FieldDefinition::new("material")
                .from_keys(&["components.m"])
                .convert(material),
        )
        .field(FieldDefinition::new("duration").convert(duration))
        .field(
            FieldDefinition::new("concentration")
                .from_keys(&["duration"])
                .convert(concentration),
        )
        .field(
            FieldDefinition::new("ritual")
                .from_keys(&["meta.ritual"])
                .convert(|raw, _| raw.as_bool().map(MetaValue::Bool)),
        )
        .field(
            FieldDefinition::new("save")
                .from_keys(&["savingThrow"])
                .convert(convert::title_list)
                .only(Edition::Classic),
        )
        .field(
            FieldDefinition::new("damage_types")
                .from_keys(&["damageInflict"])
                .convert(damage_types),
        )
        .field(
            FieldDefinition::new("classes")
                .from_keys(&["classes.fromClassList"])
                .convert(classes),
        )
        .field(
            FieldDefinition::new("sources")
                .from_keys(&["source"])
                .convert(convert::sources),
        )
}

fn school(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let code = raw.as_str()?;
    let name = School::from_code(code).map_or_else(|| title_case(code), |s| s.name().to_owned());
    Some(MetaValue::Str(name))
}

fn casting_time(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let parts: Vec<String> = raw
        .as_array()?
        .iter()
        .filter_map(|time| {
            let number = time.get("number")?.as_i64()?;
            let unit = match time.get("unit")?.as_str()? {
                "bonus" => "bonus action",
                other => other,
            };
            let plural = if number == 1 { "" } else { "s" };
            let mut part = format!("{number} {unit}{plural}");
            if let Some(condition) = time.get("condition").and_then(text) {
                part.push_str(", ");
                part.push_str(&condition);
            }
            Some(part)
        })
        .collect();
    (!parts.is_empty()).then(|| MetaValue::Str(parts.join(" or ")))
}

fn range(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let kind = raw.get("type")?.as_str()?;
    let distance = raw.get("distance");
    let unit = distance
        .and_then(|d| d.get("type"))
        .and_then(Value::as_str);
    let amount = distance
        .and_then(|d| d.get("amount"))
        .and_then(Value::as_i64);
    let range = match (kind, unit, amount) {
        ("special", _, _) => "Special".to_owned(),
        ("point", Some("self"), _) => "Self".to_owned(),
        ("point", Some("touch"), _) => "Touch".to_owned(),
        ("point", Some("sight"), _) => "Sight".to_owned(),
        ("point", Some("unlimited"), _) => "Unlimited".to_owned(),
        ("point", Some("feet"), Some(n)) => format!("{n} feet"),
        ("point", Some("miles"), Some(1)) => "1 mile".to_owned(),
        ("point", Some("miles"), Some(n)) => format!("{n} miles"),
        (shape, Some(unit), Some(n)) if shape != "point" => {
            let unit = if unit == "miles" { "mile" } else { "foot" };
            format!("Self ({n}-{unit} {shape})")
        }
        _ => return None,
    };
    Some(MetaValue::Str(range))
}

fn components(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let obj = raw.as_object()?;
    let list = [("v", "V"), ("s", "S"), ("m", "M"), ("r", "R")]
        .into_iter()
        .filter(|(key, _)| obj.get(*key).is_some_and(|v| v != &Value::Bool(false)))
        .map(|(_, label)| label.to_owned())
        .collect();
    Some(MetaValue::List(list))
}

fn material(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    match raw {
        Value::String(_) => text(raw).map(MetaValue::Str),
        Value::Object(obj) => obj.get("text").and_then(text).map(MetaValue::Str),
        _ => None,
    }
}

fn duration(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let parts: Vec<String> = raw
        .as_array()?
        .iter()
        .filter_map(|d| {
            let kind = d.get("type")?.as_str()?;
            let part = match kind {
                "instant" => "Instantaneous".to_owned(),
                "special" => "Special".to_owned(),
                "permanent" => {
                    let ends: Vec<&str> = d
                        .get("ends")
                        .and_then(Value::as_array)
                        .map(|e| e.iter().filter_map(Value::as_str).collect())
                        .unwrap_or_default();
                    match (ends.contains(&"dispel"), ends.contains(&"trigger")) {
                        (true, true) => "Until dispelled or triggered".to_owned(),
                        (true, false) => "Until dispelled".to_owned(),
                        (false, true) => "Until triggered".to_owned(),
                        (false, false) => "Permanent".to_owned(),
                    }
                }
                "timed" => {
                    let timed = d.get("duration")?;
                    let amount = timed.get("amount")?.as_i64()?;
                    let unit = timed.get("type")?.as_str()?;
                    let plural = if amount == 1 { "" } else { "s" };
                    let span = format!("{amount} {unit}{plural}");
                    if d.get("concentration").and_then(Value::as_bool) == Some(true) {
                        format!("Concentration, up to {span}")
                    } else if timed.get("upTo").and_then(Value::as_bool) == Some(true) {
                        format!("Up to {span}")
                    } else {
                        span
                    }
                }
                _ => return None,
            };
            Some(part)
        })
        .collect();
    (!parts.is_empty()).then(|| MetaValue::Str(parts.join(" or ")))
}

fn concentration(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let any = raw
        .as_array()?
        .iter()
        .any(|d| d.get("concentration").and_then(Value::as_bool) == Some(true));
    Some(MetaValue::Bool(any))
}

fn damage_types(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let list = convert::string_list(raw)
        .iter()
        .map(|s| DamageType::from_code(s).map_or_else(|| s.to_lowercase(), |d| d.name().to_owned()))
        .collect();
    Some(MetaValue::List(list))
}

fn classes(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let mut names: Vec<String> = Vec::new();
    for entry in raw.as_array()? {
        if let Some(name) = entry.get("name").and_then(text)
            && !names.contains(&name)
        {
            names.push(name);
        }
    }
    Some(MetaValue::List(names))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::ProjectionContext;

    fn project(record: &Value, edition: Edition) -> String {
        let ctx = ProjectionContext::new(edition);
        spell()
            .default_schema(edition)
            .project_record(record, &ctx)
            .serialize()
    }

    #[test]
    fn test_cantrip_metadata() {
        let record = json!({
            "name": "Fire Bolt",
            "source": "PHB",
            "level": 0,
            "school": "V",
            "components": {"v": true, "s": true}
        });
        let text = project(&record, Edition::Classic);
        assert!(text.contains("level: 0"), "{text}");
        assert!(text.contains("school: \"Evocation\""), "{text}");
        assert!(text.contains("components: [\"V\", \"S\"]"), "{text}");
        assert!(!text.contains("material"), "{text}");
    }

    #[test]
    fn test_full_spell() {
        let record = json!({
            "name": "Fireball",
            "source": "PHB",
            "otherSources": [{"source": "SRD"}],
            "level": 3,
            "school": "V",
            "time": [{"number": 1, "unit": "action"}],
            "range": {"type": "point", "distance": {"type": "feet", "amount": 150}},
            "components": {"v": true, "s": true, "m": "a tiny ball of bat guano and sulfur"},
            "duration": [{"type": "instant"}],
            "savingThrow": ["dexterity"],
            "damageInflict": ["fire"],
            "classes": {"fromClassList": [{"name": "Sorcerer", "source": "PHB"}, {"name": "Wizard", "source": "PHB"}]}
        });
        assert_eq!(
            project(&record, Edition::Classic),
            "name: \"Fireball\"\n\
             level: 3\n\
             school: \"Evocation\"\n\
             casting_time: \"1 action\"\n\
             range: \"150 feet\"\n\
             components: [\"V\", \"S\", \"M\"]\n\
             material: \"a tiny ball of bat guano and sulfur\"\n\
             duration: \"Instantaneous\"\n\
             concentration: false\n\
             save: [\"Dexterity\"]\n\
             damage_types: [\"fire\"]\n\
             classes: [\"Sorcerer\", \"Wizard\"]\n\
             sources: [\"Player's Handbook (2014)\", \"System Reference Document 5.1\"]"
        );
    }

    #[test]
    fn test_save_only_in_classic_default() {
        let record = json!({"name": "Fireball", "savingThrow": ["dexterity"]});
        assert!(project(&record, Edition::Classic).contains("save:"));
        assert!(!project(&record, Edition::One).contains("save:"));
    }

    #[test]
    fn test_casting_time_and_duration_shapes() {
        let ctx = ProjectionContext::default();
        let p = Projection::new(&Value::Null, &ctx);
        assert_eq!(
            casting_time(&json!([{"number": 1, "unit": "reaction", "condition": "which you take when you are hit"}]), &p),
            Some(MetaValue::from("1 reaction, which you take when you are hit"))
        );
        assert_eq!(
            casting_time(&json!([{"number": 10, "unit": "minute"}]), &p),
            Some(MetaValue::from("10 minutes"))
        );
        assert_eq!(
            duration(&json!([{"type": "timed", "duration": {"type": "minute", "amount": 1}, "concentration": true}]), &p),
            Some(MetaValue::from("Concentration, up to 1 minute"))
        );
        assert_eq!(
            duration(&json!([{"type": "permanent", "ends": ["dispel"]}]), &p),
            Some(MetaValue::from("Until dispelled"))
        );
    }

    #[test]
    fn test_range_shapes() {
        let ctx = ProjectionContext::default();
        let p = Projection::new(&Value::Null, &ctx);
        assert_eq!(
            range(&json!({"type": "cone", "distance": {"type": "feet", "amount": 15}}), &p),
            Some(MetaValue::from("Self (15-foot cone)"))
        );
        assert_eq!(
            range(&json!({"type": "point", "distance": {"type": "touch"}}), &p),
            Some(MetaValue::from("Touch"))
        );
        assert_eq!(range(&json!({"type": "point"}), &p), None);
    }

    #[test]
    fn test_ritual_flag() {
        let text = project(&json!({"name": "Alarm", "meta": {"ritual": true}}), Edition::One);
        assert!(text.contains("ritual: true"), "{text}");
    }
}
