use lw_codes::strip_source_suffix;
use lw_tags::{strip_tags, title_case};
use serde_json::{Map, Value};

/// Proficiencies granted outright plus the pool of any choice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Proficiencies {
    /// Human-readable list: fixed grants, then `Choose N` / `Any N` entries.
    pub granted: Vec<String>,
    /// Options a choice picks from.
    pub choices: Vec<String>,
}

/// Normalise a proficiency list.
///
/// Sources express proficiencies as flat string arrays, as
/// `{"choose": {"from": [...], "count": N}}` objects, as flag maps
/// (`{"stealth": true}`), or as `{"any": N}` counts. All shapes collapse to
/// one [`Proficiencies`] value.
#[must_use]
pub fn proficiencies(raw: &Value) -> Proficiencies {
    let mut out = Proficiencies::default();
    match raw {
        Value::Array(items) => {
            for item in items {
                collect(&mut out, item);
            }
        }
        other => collect(&mut out, other),
    }
    out
}

fn collect(out: &mut Proficiencies, item: &Value) {
    match item {
        Value::String(s) => push_unique(&mut out.granted, display_name(s)),
        Value::Object(obj) => collect_object(out, obj),
        _ => {}
    }
}

fn collect_object(out: &mut Proficiencies, obj: &Map<String, Value>) {
    if let Some(name) = obj.get("proficiency").and_then(Value::as_str) {
        push_unique(&mut out.granted, display_name(name));
        return;
    }
    for (key, value) in obj {
        match (key.as_str(), value) {
            ("choose", Value::Object(choose)) => {
                let count = choose.get("count").and_then(Value::as_u64).unwrap_or(1);
                push_unique(&mut out.granted, format!("Choose {count}"));
                if let Some(Value::Array(from)) = choose.get("from") {
                    for option in from {
                        let name = match option {
                            Value::String(s) => display_name(s),
                            Value::Object(o) => match o.get("name").and_then(Value::as_str) {
                                Some(n) => display_name(n),
                                None => continue,
                            },
                            _ => continue,
                        };
                        push_unique(&mut out.choices, name);
                    }
                }
            }
            (key, Value::Number(n)) if key.starts_with("any") => {
                push_unique(&mut out.granted, any_label(key, &n.to_string()));
            }
            (key, Value::Bool(true)) => push_unique(&mut out.granted, display_name(key)),
            (key, Value::String(s)) if !s.is_empty() => {
                push_unique(&mut out.granted, format!("{} ({})", display_name(key), strip_tags(s)));
            }
            _ => {}
        }
    }
}

/// `anyStandard` with count 1 -> `Any 1 standard`.
fn any_label(key: &str, count: &str) -> String {
    let rest = &key["any".len()..];
    let mut words = String::new();
    for c in rest.chars() {
        if c.is_uppercase() && !words.is_empty() {
            words.push(' ');
        }
        words.extend(c.to_lowercase());
    }
    if words.is_empty() {
        format!("Any {count}")
    } else {
        format!("Any {count} {words}")
    }
}

fn display_name(raw: &str) -> String {
    let stripped = strip_tags(raw);
    title_case(strip_source_suffix(stripped.trim()))
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !item.is_empty() && !list.contains(&item) {
        list.push(item);
    }
}
