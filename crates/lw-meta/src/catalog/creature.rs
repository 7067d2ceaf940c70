use lw_codes::{AlignmentCode, Size, describe_alignment};
use lw_tags::title_case;
use serde_json::Value;

use crate::convert::{self, text};
use crate::{FieldCatalog, FieldDefinition, MetaValue, Projection};

pub fn creature() -> FieldCatalog {
    FieldCatalog::new("creature")
        .field(FieldDefinition::new("name"))
        .field(
            FieldDefinition::new("size")
                .convert(|raw, _| convert::size_name(raw).map(MetaValue::Str)),
        )
        .field(FieldDefinition::new("type").convert(|raw, _| creature_type(raw).map(MetaValue::Str)))
        .field(FieldDefinition::new("alignment").convert(alignment))
        .field(FieldDefinition::new("AC").from_keys(&["ac"]).convert(armor_class))
        .field(FieldDefinition::new("HP").from_keys(&["hp"]).convert(hit_points))
        .field(
            FieldDefinition::new("speed")
                .convert(|raw, _| convert::speed_summary(raw).map(MetaValue::Str)),
        )
        .field(FieldDefinition::new("cr").convert(challenge_rating))
        .field(FieldDefinition::new("str").convert(convert::integer))
        .field(FieldDefinition::new("dex").convert(convert::integer))
        .field(FieldDefinition::new("con").convert(convert::integer))
        .field(FieldDefinition::new("int").convert(convert::integer))
        .field(FieldDefinition::new("wis").convert(convert::integer))
        .field(FieldDefinition::new("cha").convert(convert::integer))
        .field(FieldDefinition::new("senses"))
        .field(FieldDefinition::new("passive").convert(convert::integer))
        .field(FieldDefinition::new("languages"))
        .field(
            FieldDefinition::new("environment")
                .convert(convert::title_list)
                .optional(),
        )
        .field(
            FieldDefinition::new("sources")
                .from_keys(&["source"])
                .convert(convert::sources),
        )
}

/// `"humanoid"` or `{"type": "humanoid", "tags": ["goblinoid"]}` as
/// `Humanoid (Goblinoid)`.
pub(crate) fn creature_type(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(title_case(s)),
        Value::Object(obj) => {
            let base = match obj.get("type")? {
                Value::String(s) => title_case(s),
                Value::Object(choose) => choose
                    .get("choose")?
                    .as_array()?
                    .iter()
                    .filter_map(Value::as_str)
                    .map(title_case)
                    .collect::<Vec<_>>()
                    .join(" or "),
                _ => return None,
            };
            if let Some(size) = obj
                .get("swarmSize")
                .and_then(Value::as_str)
                .and_then(Size::from_code)
            {
                return Some(format!("Swarm of {} {base}s", size.name()));
            }
            let tags: Vec<String> = obj
                .get("tags")
                .and_then(Value::as_array)
                .map(|tags| {
                    tags.iter()
                        .filter_map(|tag| match tag {
                            Value::String(s) => Some(title_case(s)),
                            Value::Object(t) => {
                                let tag = t.get("tag").and_then(Value::as_str)?;
                                Some(match t.get("prefix").and_then(Value::as_str) {
                                    Some(prefix) => title_case(&format!("{prefix} {tag}")),
                                    None => title_case(tag),
                                })
                            }
                            _ => None,
                        })
                        .collect()
                })
                .unwrap_or_default();
            if tags.is_empty() {
                Some(base)
            } else {
                Some(format!("{base} ({})", tags.join(", ")))
            }
        }
        _ => None,
    }
}

fn alignment(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    alignment_text(raw).map(MetaValue::Str)
}

/// Alignment codes, or alternatives of `{"alignment": [...]}` and
/// `{"special": "..."}` objects.
fn alignment_text(raw: &Value) -> Option<String> {
    let items = raw.as_array()?;
    if items.iter().all(Value::is_string) {
        let codes: Vec<AlignmentCode> = items
            .iter()
            .filter_map(Value::as_str)
            .filter_map(AlignmentCode::from_code)
            .collect();
        return (!codes.is_empty()).then(|| describe_alignment(&codes));
    }
    let options: Vec<String> = items
        .iter()
        .filter_map(|item| match item.get("special") {
            Some(special) => text(special),
            None => alignment_text(item.get("alignment")?),
        })
        .collect();
    (!options.is_empty()).then(|| options.join(" or "))
}

/// First numeric armor class.
fn armor_class(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let entries: Vec<&Value> = match raw {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };
    for entry in &entries {
        match entry {
            Value::Number(n) => return n.as_i64().map(MetaValue::Int),
            Value::Object(obj) => {
                if let Some(ac) = obj.get("ac").and_then(Value::as_i64) {
                    return Some(MetaValue::Int(ac));
                }
            }
            _ => {}
        }
    }
    entries
        .iter()
        .find_map(|e| e.get("special").and_then(text))
        .map(MetaValue::Str)
}

fn hit_points(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    match raw {
        Value::Number(n) => n.as_i64().map(MetaValue::Int),
        Value::Object(obj) => match obj.get("average").and_then(Value::as_i64) {
            Some(average) => Some(MetaValue::Int(average)),
            None => obj.get("special").and_then(text).map(MetaValue::Str),
        },
        _ => None,
    }
}

fn challenge_rating(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    match raw {
        Value::Object(obj) => obj.get("cr").and_then(text).map(MetaValue::Str),
        other => text(other).map(MetaValue::Str),
    }
}
