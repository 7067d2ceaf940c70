//! Class and subclass documents.
//!
//! A class record expands to one class document plus one document per
//! subclass. Features are read from the `classFeature` and `subclassFeature`
//! collections of the same source file and grouped by level.

use std::collections::BTreeMap;

use lw_render::{EntryNode, EntryRenderer};
use lw_tags::{class_document_name, link, strip_tags, subclass_document_name};
use serde_json::Value;

use super::{Body, Draft, Origin, Page, summary_list};
use crate::source::SourceFile;

pub(crate) fn folder(class_name: &str) -> String {
    format!("Classes/{}", class_document_name(class_name))
}

pub(crate) fn drafts<'a>(
    page: &Page<'a>,
    file: &SourceFile<'a>,
    renderer: &mut EntryRenderer,
) -> Vec<Draft<'a>> {
    let class_name = page.name.as_str();
    let class_source = page.record.get("source").and_then(Value::as_str);
    let subclasses = subclasses_of(page.record, file, class_name, class_source);

    let features: Vec<&Value> = file
        .collection("classFeature")
        .iter()
        .filter(|f| belongs_to_class(f, class_name, class_source))
        .collect();

    let mut drafts = Vec::with_capacity(subclasses.len() + 1);
    drafts.push(Draft {
        folder: folder(class_name),
        name: class_document_name(class_name),
        body: class_body(page, &features, &subclasses, renderer),
        origin: Origin::Page,
    });

    for subclass in subclasses {
        let Some(short) = short_name(subclass) else {
            continue;
        };
        let features: Vec<&Value> = file
            .collection("subclassFeature")
            .iter()
            .filter(|f| {
                belongs_to_class(f, class_name, class_source)
                    && matches(f.get("subclassShortName"), short)
            })
            .collect();
        drafts.push(Draft {
            folder: folder(class_name),
            name: subclass_document_name(class_name, short),
            body: subclass_body(class_name, subclass, &features, renderer),
            origin: Origin::Subclass(subclass),
        });
    }
    drafts
}

fn class_body(
    page: &Page<'_>,
    features: &[&Value],
    subclasses: &[&Value],
    renderer: &mut EntryRenderer,
) -> String {
    let mut body = Body::titled(&page.name);
    body.push(summary_list(
        &page.summary,
        &[
            ("hit_die", "Hit Die"),
            ("primary_ability", "Primary Ability"),
            ("saving_throws", "Saving Throws"),
            ("armor", "Armor"),
            ("weapons", "Weapons"),
            ("tools", "Tools"),
            ("skills", "Skills"),
            ("skill_choices", "Skill Choices"),
            ("spellcasting_ability", "Spellcasting Ability"),
        ],
    ));
    body.push_entries(renderer, page.record, "entries");
    body.push(features_by_level(features, renderer));

    let links: Vec<String> = subclasses
        .iter()
        .filter_map(|subclass| {
            let short = short_name(subclass)?;
            let label = subclass.get("name").and_then(Value::as_str).unwrap_or(short);
            let target = subclass_document_name(&page.name, short);
            Some(format!(
                "- {}",
                link(renderer.tags().links, &target, None, Some(&strip_tags(label)))
            ))
        })
        .collect();
    if !links.is_empty() {
        let heading = page.summary.get_str("subclass_title").unwrap_or("Subclasses");
        body.push(format!("## {heading}\n\n{}", links.join("\n")));
    }
    body.finish()
}

fn subclass_body(
    class_name: &str,
    subclass: &Value,
    features: &[&Value],
    renderer: &mut EntryRenderer,
) -> String {
    let name = subclass
        .get("name")
        .and_then(Value::as_str)
        .map(strip_tags)
        .unwrap_or_default();
    let class_link = link(renderer.tags().links, &class_document_name(class_name), None, None);
    let mut body = Body::titled(&name);
    body.push(format!("*{class_link} subclass*"));
    body.push_entries(renderer, subclass, "entries");
    body.push(features_by_level(features, renderer));
    body.finish()
}

/// `## Level N` sections holding one `###` section per feature.
fn features_by_level(features: &[&Value], renderer: &mut EntryRenderer) -> String {
    let mut levels: BTreeMap<Option<i64>, Vec<EntryNode>> = BTreeMap::new();
    for feature in features {
        let Some(name) = feature.get("name").and_then(Value::as_str) else {
            continue;
        };
        let level = feature.get("level").and_then(Value::as_i64);
        levels.entry(level).or_default().push(EntryNode::Section {
            name: Some(name.to_owned()),
            children: feature
                .get("entries")
                .map(EntryNode::decode_list)
                .unwrap_or_default(),
        });
    }
    let sections: Vec<EntryNode> = levels
        .into_iter()
        .map(|(level, children)| EntryNode::Section {
            name: Some(level.map_or_else(|| "Features".to_owned(), |l| format!("Level {l}"))),
            children,
        })
        .collect();
    renderer.render_all(&sections, 1)
}

/// Subclasses of the class: the file's `subclass` collection, or the
/// record's own `subclasses` list when the file has none.
fn subclasses_of<'a>(
    record: &'a Value,
    file: &SourceFile<'a>,
    class_name: &str,
    class_source: Option<&str>,
) -> Vec<&'a Value> {
    let from_file: Vec<&Value> = file
        .collection("subclass")
        .iter()
        .filter(|s| belongs_to_class(s, class_name, class_source))
        .collect();
    if !from_file.is_empty() {
        return from_file;
    }
    record
        .get("subclasses")
        .and_then(Value::as_array)
        .map(|items| items.iter().collect())
        .unwrap_or_default()
}

fn short_name(subclass: &Value) -> Option<&str> {
    subclass
        .get("shortName")
        .or_else(|| subclass.get("name"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Whether `entry` names this class. A missing `classSource` matches any
/// source.
fn belongs_to_class(entry: &Value, class_name: &str, class_source: Option<&str>) -> bool {
    if !matches(entry.get("className"), class_name) {
        return false;
    }
    match (entry.get("classSource").and_then(Value::as_str), class_source) {
        (Some(theirs), Some(ours)) => theirs.trim().eq_ignore_ascii_case(ours.trim()),
        _ => true,
    }
}

fn matches(value: Option<&Value>, expected: &str) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(expected.trim()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_belongs_to_class() {
        let feature = json!({"className": "Wizard", "classSource": "PHB"});
        assert!(belongs_to_class(&feature, "wizard", Some("PHB")));
        assert!(!belongs_to_class(&feature, "Wizard", Some("XPHB")));
        assert!(belongs_to_class(&json!({"className": "Wizard"}), "Wizard", Some("XPHB")));
        assert!(!belongs_to_class(&json!({}), "Wizard", None));
    }

    #[test]
    fn test_short_name_falls_back_to_name() {
        assert_eq!(short_name(&json!({"shortName": "Evocation"})), Some("Evocation"));
        assert_eq!(short_name(&json!({"name": "Champion"})), Some("Champion"));
        assert_eq!(short_name(&json!({"shortName": " "})), None);
    }
}
