//! Value converters shared by the field catalogs.
//!
//! Every converter is total: it returns `None` for shapes it does not
//! understand instead of failing.

mod money;
mod proficiency;

use lw_codes::{Ability, Size, strip_source_suffix};
use lw_tags::{strip_tags, title_case};
use serde_json::Value;

use crate::{MetaValue, Projection};

pub use money::{format_value, value_in_gold};
pub use proficiency::{Proficiencies, proficiencies};

/// Default conversion for fields declared without a converter.
pub(crate) fn identity(raw: &Value) -> Option<MetaValue> {
    match raw {
        Value::String(s) => Some(MetaValue::Str(strip_tags(s).trim().to_owned())),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(MetaValue::Int(i)),
            None => n.as_f64().map(MetaValue::Float),
        },
        Value::Bool(b) => Some(MetaValue::Bool(*b)),
        Value::Array(items) => Some(MetaValue::List(items.iter().filter_map(text).collect())),
        Value::Null | Value::Object(_) => None,
    }
}

/// Scalar as display text, with tags stripped.
#[must_use]
pub fn text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => {
            let s = strip_tags(s);
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_owned())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Strings of an array (or a lone string), tags stripped.
#[must_use]
pub fn string_list(raw: &Value) -> Vec<String> {
    match raw {
        Value::Array(items) => items.iter().filter_map(text).collect(),
        other => text(other).into_iter().collect(),
    }
}

/// Converter: title-cased string list.
pub fn title_list(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    Some(MetaValue::List(
        string_list(raw)
            .iter()
            .map(|s| title_case(strip_source_suffix(s)))
            .collect(),
    ))
}

/// Converter: title-cased single string.
pub fn title_text(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    text(raw).map(|s| MetaValue::Str(title_case(&s)))
}

/// Converter: integer, accepting numeric strings.
pub fn integer(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    match raw {
        Value::Number(n) => n.as_i64().map(MetaValue::Int),
        Value::String(s) => s.trim().parse().ok().map(MetaValue::Int),
        _ => None,
    }
}

/// Ability codes to full names.
///
/// Accepts a code, a list of codes, a `{"str": true}` flag map, or a list of
/// flag maps.
#[must_use]
pub fn ability_list(raw: &Value) -> Vec<String> {
    match raw {
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| v.as_bool() == Some(true))
            .filter_map(|(k, _)| Ability::from_code(k))
            .map(|a| a.name().to_owned())
            .collect(),
        Value::Array(items) => items.iter().flat_map(ability_list).collect(),
        other => text(other)
            .and_then(|s| Ability::from_code(&s))
            .map(|a| vec![a.name().to_owned()])
            .unwrap_or_default(),
    }
}

/// Converter: [`ability_list`].
pub fn ability_names(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    Some(MetaValue::List(ability_list(raw)))
}

/// Converter: deduplicated, expanded source names.
///
/// Reads the raw primary code plus the record's `otherSources` and
/// `additionalSources` lists.
pub fn sources(raw: &Value, projection: &Projection<'_>) -> Option<MetaValue> {
    let mut codes: Vec<String> = text(raw).into_iter().collect();
    for key in ["otherSources", "additionalSources"] {
        let Some(Value::Array(items)) = projection.get(key) else {
            continue;
        };
        for item in items {
            let code = match item {
                Value::Object(obj) => obj.get("source").and_then(text),
                other => text(other),
            };
            codes.extend(code);
        }
    }
    let mut names: Vec<String> = Vec::with_capacity(codes.len());
    for code in codes {
        let name = projection.expand_source(&code);
        if !names.contains(&name) {
            names.push(name);
        }
    }
    Some(MetaValue::List(names))
}

/// Size codes to names, alternatives joined with `or`.
#[must_use]
pub fn size_name(raw: &Value) -> Option<String> {
    let names: Vec<&str> = string_list(raw)
        .iter()
        .filter_map(|code| Size::from_code(code))
        .map(Size::name)
        .collect();
    (!names.is_empty()).then(|| names.join(" or "))
}

/// Movement speeds as `30 ft., fly 60 ft. (hover)`.
#[must_use]
pub fn speed_summary(raw: &Value) -> Option<String> {
    match raw {
        Value::Number(n) => Some(format!("{n} ft.")),
        Value::Object(map) => {
            let can_hover = map.get("canHover").and_then(Value::as_bool) == Some(true);
            let mut parts = Vec::new();
            for mode in ["walk", "burrow", "climb", "fly", "swim"] {
                let Some(value) = map.get(mode) else {
                    continue;
                };
                let mut part = match value {
                    Value::Number(n) => format!("{n} ft."),
                    Value::Object(obj) => match obj.get("number").and_then(Value::as_i64) {
                        Some(n) => {
                            let condition = obj.get("condition").and_then(text);
                            match condition {
                                Some(c) => format!("{n} ft. {c}"),
                                None => format!("{n} ft."),
                            }
                        }
                        None => continue,
                    },
                    Value::Bool(true) if mode != "walk" => "equal to walking speed".to_owned(),
                    _ => continue,
                };
                if mode == "fly" && can_hover && !part.contains("hover") {
                    part.push_str(" (hover)");
                }
                if mode == "walk" {
                    parts.push(part);
                } else {
                    parts.push(format!("{mode} {part}"));
                }
            }
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::ProjectionContext;
    use lw_codes::Edition;

    #[test]
    fn test_identity() {
        assert_eq!(identity(&json!("{@b Bold}")), Some(MetaValue::from("Bold")));
        assert_eq!(identity(&json!(2.5)), Some(MetaValue::Float(2.5)));
        assert_eq!(
            identity(&json!(["a", 1, {}])),
            Some(MetaValue::List(vec!["a".to_owned(), "1".to_owned()]))
        );
        assert_eq!(identity(&json!({"a": 1})), None);
    }

    #[test]
    fn test_sources_dedup_and_qualify() {
        let ctx = ProjectionContext::new(Edition::One);
        let record = json!({
            "source": "PHB",
            "otherSources": [{"source": "SRD"}, {"source": "PHB"}],
            "additionalSources": [{"source": "XGE"}],
            "reprintedAs": ["Fireball|XPHB"]
        });
        let projection = Projection::new(&record, &ctx);
        assert_eq!(
            sources(&record["source"], &projection),
            Some(MetaValue::List(vec![
                "Player's Handbook (2014)".to_owned(),
                "System Reference Document 5.2".to_owned(),
                "Xanathar's Guide to Everything".to_owned(),
            ]))
        );
    }

    #[test]
    fn test_ability_names_shapes() {
        let list = |v: Value| ability_list(&v);
        let names = |n: &[&str]| n.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();
        assert_eq!(list(json!(["int", "wis"])), names(&["Intelligence", "Wisdom"]));
        assert_eq!(list(json!([{"str": true}, {"dex": true}])), names(&["Strength", "Dexterity"]));
        assert_eq!(list(json!("cha")), names(&["Charisma"]));
    }

    #[test]
    fn test_size_name() {
        assert_eq!(size_name(&json!(["M"])).as_deref(), Some("Medium"));
        assert_eq!(size_name(&json!(["S", "M"])).as_deref(), Some("Small or Medium"));
        assert_eq!(size_name(&json!(["Q"])), None);
    }

    #[test]
    fn test_speed_summary() {
        assert_eq!(speed_summary(&json!(30)).as_deref(), Some("30 ft."));
        assert_eq!(
            speed_summary(&json!({"walk": 30, "swim": 30, "fly": {"number": 60, "condition": "(hover)"}})).as_deref(),
            Some("30 ft., fly 60 ft. (hover), swim 30 ft.")
        );
        assert_eq!(
            speed_summary(&json!({"walk": 10, "fly": 90, "canHover": true})).as_deref(),
            Some("10 ft., fly 90 ft. (hover)")
        );
        assert_eq!(
            speed_summary(&json!({"walk": 30, "climb": true})).as_deref(),
            Some("30 ft., climb equal to walking speed")
        );
        assert_eq!(speed_summary(&json!({})), None);
    }
}
