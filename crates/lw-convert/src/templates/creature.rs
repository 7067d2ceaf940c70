//! Creature stat blocks.

use lw_codes::Ability;
use lw_config::BestiaryConfig;
use lw_meta::MetaValue;
use lw_render::{Align, Cell, EntryNode, EntryRenderer, Table};
use serde_json::Value;
use tracing::warn;

use super::{Body, Page, named_blocks, summary_list};

/// Action-like collections, in stat block order, with their headings.
const SECTIONS: &[(&str, &str, Option<&str>)] = &[
    ("action", "Actions", None),
    ("bonus", "Bonus Actions", None),
    ("reaction", "Reactions", None),
    ("legendary", "Legendary Actions", Some("legendaryHeader")),
    ("mythic", "Mythic Actions", Some("mythicHeader")),
];

/// Creatures without armor class and hit points are not stat blocks.
pub(crate) fn gate(page: &Page<'_>) -> Option<String> {
    if page.summary.contains_key("AC") || page.summary.contains_key("HP") {
        return None;
    }
    warn!(creature = %page.name, "Creature has neither AC nor HP, skipping");
    Some("missing AC and HP".to_owned())
}

pub(crate) fn folder(page: &Page<'_>, bestiary: &BestiaryConfig) -> String {
    let group = if is_beast(page.record) {
        "Beasts"
    } else if bestiary.is_story_npc(&page.name)
        || page.record.get("isNamedCreature").and_then(Value::as_bool) == Some(true)
    {
        "Story NPCs"
    } else {
        "Monsters"
    };
    format!("Bestiary/{group}")
}

fn is_beast(record: &Value) -> bool {
    let kind = match record.get("type") {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(Value::Object(obj)) => obj.get("type").and_then(Value::as_str),
        _ => None,
    };
    kind.is_some_and(|k| k.trim().eq_ignore_ascii_case("beast"))
}

pub(crate) fn body(page: &Page<'_>, renderer: &mut EntryRenderer) -> String {
    let summary = &page.summary;
    let record = page.record;
    let mut body = Body::titled(&page.name);
    body.push(type_line(page));

    let mut defenses = Vec::new();
    if let Some(ac) = summary.get("AC") {
        defenses.push(format!("- **Armor Class:** {}", armor_note(ac, record, renderer)));
    }
    if let Some(hp) = summary.get("HP") {
        let mut line = format!("- **Hit Points:** {}", hp.display());
        if let Some(formula) = record.pointer("/hp/formula").and_then(Value::as_str) {
            line.push_str(&format!(" ({formula})"));
        }
        defenses.push(line);
    }
    if let Some(speed) = summary.get("speed") {
        defenses.push(format!("- **Speed:** {}", speed.display()));
    }
    body.push(defenses.join("\n"));

    body.push(ability_table(page, renderer));

    let mut details = Vec::new();
    if let Some(senses) = senses_line(page) {
        details.push(senses);
    }
    details.push(summary_list(summary, &[("languages", "Languages"), ("cr", "Challenge")]));
    body.push(details.join("\n"));

    if let Some(traits) = record.get("trait") {
        body.push(renderer.render_all(&named_blocks(traits), 1));
    }
    if let Some(spellcasting) = record.get("spellcasting") {
        body.push(renderer.render_all(&spellcasting_blocks(spellcasting), 1));
    }
    for (key, heading, header) in SECTIONS {
        let Some(items) = record.get(*key) else {
            continue;
        };
        let mut children = header
            .and_then(|h| record.get(h))
            .map(EntryNode::decode_list)
            .unwrap_or_default();
        children.extend(named_blocks(items));
        let section = EntryNode::Section {
            name: Some((*heading).to_owned()),
            children,
        };
        body.push(renderer.render(&section, 1));
    }
    body.finish()
}

/// `*Small Humanoid (Goblinoid), Neutral Evil*`.
fn type_line(page: &Page<'_>) -> String {
    let summary = &page.summary;
    let kind = [summary.get_str("size"), summary.get_str("type")]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    let line = match (kind.is_empty(), summary.get_str("alignment")) {
        (false, Some(alignment)) => format!("{kind}, {alignment}"),
        (true, Some(alignment)) => alignment.to_owned(),
        (_, None) => kind,
    };
    if line.is_empty() {
        line
    } else {
        format!("*{line}*")
    }
}

/// `15 (leather armor, shield)`.
fn armor_note(ac: &MetaValue, record: &Value, renderer: &EntryRenderer) -> String {
    let from: Vec<String> = record
        .get("ac")
        .and_then(Value::as_array)
        .and_then(|items| items.iter().find_map(|i| i.get("from")?.as_array()))
        .map(|from| {
            from.iter()
                .filter_map(Value::as_str)
                .map(|f| renderer.text(f))
                .collect()
        })
        .unwrap_or_default();
    if from.is_empty() {
        ac.display()
    } else {
        format!("{} ({})", ac.display(), from.join(", "))
    }
}

/// Score table with modifiers: `| 8 (-1) | 14 (+2) | ...`.
fn ability_table(page: &Page<'_>, renderer: &mut EntryRenderer) -> String {
    let scores: Vec<Option<i64>> = Ability::ALL
        .iter()
        .map(|a| page.summary.get(a.code()).and_then(MetaValue::as_int))
        .collect();
    if scores.iter().all(Option::is_none) {
        return String::new();
    }
    let columns = Ability::ALL
        .iter()
        .map(|a| a.abbreviation().to_owned())
        .collect();
    let row = scores
        .into_iter()
        .map(|score| {
            Cell::Text(score.map_or_else(
                || "\u{2014}".to_owned(),
                |s| format!("{s} ({:+})", Ability::modifier(s)),
            ))
        })
        .collect();
    let table = Table {
        aligns: vec![Align::Center; Ability::ALL.len()],
        ..Table::new(columns, vec![row])
    };
    renderer.render(&EntryNode::Table(table), 1)
}

/// `- **Senses:** darkvision 60 ft., passive Perception 9`.
fn senses_line(page: &Page<'_>) -> Option<String> {
    let mut senses: Vec<String> = match page.summary.get("senses") {
        Some(MetaValue::List(items)) => items.clone(),
        Some(other) => vec![other.display()],
        None => Vec::new(),
    };
    if let Some(passive) = page.summary.get("passive") {
        senses.push(format!("passive Perception {}", passive.display()));
    }
    (!senses.is_empty()).then(|| format!("- **Senses:** {}", senses.join(", ")))
}

/// Spellcasting traits as bold lead-in blocks with one line per frequency.
fn spellcasting_blocks(value: &Value) -> Vec<EntryNode> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| {
            let mut children = item
                .get("headerEntries")
                .map(EntryNode::decode_list)
                .unwrap_or_default();
            let lines = spell_lines(item);
            if !lines.is_empty() {
                children.push(EntryNode::List(lines.into_iter().map(EntryNode::Text).collect()));
            }
            if let Some(footer) = item.get("footerEntries") {
                children.extend(EntryNode::decode_list(footer));
            }
            let name = item
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("Spellcasting");
            EntryNode::Named {
                name: name.to_owned(),
                children,
            }
        })
        .collect()
}

fn spell_lines(item: &Value) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(will) = item.get("will") {
        lines.push(format!("At will: {}", spell_names(will)));
    }
    if let Some(Value::Object(daily)) = item.get("daily") {
        for (key, spells) in daily {
            let (count, each) = key.split_at(key.trim_end_matches('e').len());
            let each = if each.is_empty() { "" } else { " each" };
            lines.push(format!("{count}/day{each}: {}", spell_names(spells)));
        }
    }
    if let Some(Value::Object(levels)) = item.get("spells") {
        for (level, entry) in levels {
            let spells = entry.get("spells").map(spell_names).unwrap_or_default();
            let line = match (level.parse::<i64>(), entry.get("slots").and_then(Value::as_i64)) {
                (Ok(0), _) => format!("Cantrips (at will): {spells}"),
                (Ok(n), Some(slots)) => {
                    format!("{} level ({slots} slots): {spells}", super::ordinal(n))
                }
                (Ok(n), None) => format!("{} level: {spells}", super::ordinal(n)),
                (Err(_), _) => format!("{level}: {spells}"),
            };
            lines.push(line);
        }
    }
    lines
}

fn spell_names(value: &Value) -> String {
    value
        .as_array()
        .map(|spells| {
            spells
                .iter()
                .filter_map(|s| match s {
                    Value::String(s) => Some(s.clone()),
                    Value::Object(obj) => obj.get("entry").and_then(Value::as_str).map(str::to_owned),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_is_beast() {
        assert!(is_beast(&json!({"type": "beast"})));
        assert!(is_beast(&json!({"type": {"type": "Beast", "tags": ["dinosaur"]}})));
        assert!(!is_beast(&json!({"type": "humanoid"})));
        assert!(!is_beast(&json!({})));
    }

    #[test]
    fn test_spell_lines() {
        let item = json!({
            "will": ["{@spell mage hand}"],
            "daily": {"1e": ["{@spell fly}", "{@spell misty step}"], "2": ["{@spell fog cloud}"]},
            "spells": {"0": {"spells": ["{@spell fire bolt}"]}, "1": {"slots": 4, "spells": ["{@spell shield}"]}}
        });
        assert_eq!(
            spell_lines(&item),
            vec![
                "At will: {@spell mage hand}",
                "1/day each: {@spell fly}, {@spell misty step}",
                "2/day: {@spell fog cloud}",
                "Cantrips (at will): {@spell fire bolt}",
                "1st level (4 slots): {@spell shield}",
            ]
        );
    }
}
