use lw_codes::{ItemType, Rarity};
use lw_meta::MetaValue;
use lw_render::EntryRenderer;
use serde_json::Value;

use super::{Body, Page, summary_list};

const MAGIC_ITEMS: &str = "Magic Items";

/// Item folder from the type table; magic items share one folder.
pub(crate) fn folder(page: &Page<'_>) -> String {
    let record = page.record;
    let magic = record
        .get("rarity")
        .and_then(Value::as_str)
        .and_then(Rarity::from_code)
        .is_some_and(Rarity::is_magic);
    let wondrous = record.get("wondrous").and_then(Value::as_bool) == Some(true);
    let folder = if magic || wondrous {
        MAGIC_ITEMS
    } else {
        record
            .get("type")
            .and_then(Value::as_str)
            .and_then(ItemType::from_code)
            .map_or("Adventuring Gear", ItemType::folder)
    };
    format!("Items/{folder}")
}

pub(crate) fn body(page: &Page<'_>, renderer: &mut EntryRenderer) -> String {
    let mut body = Body::titled(&page.name);
    body.push(kind_line(page));
    body.push(summary_list(
        &page.summary,
        &[
            ("weapon_category", "Category"),
            ("damage", "Damage"),
            ("properties", "Properties"),
            ("ac", "Armor Class"),
            ("weight", "Weight (lb.)"),
            ("value", "Value"),
        ],
    ));
    body.push_entries(renderer, page.record, "entries");
    body.push_entries(renderer, page.record, "additionalEntries");
    body.finish()
}

/// `*Wondrous Item, Rare (requires attunement by a wizard)*`.
fn kind_line(page: &Page<'_>) -> String {
    let summary = &page.summary;
    let mut parts: Vec<String> = Vec::new();
    if let Some(kind) = summary.get_str("type") {
        parts.push(kind.to_owned());
    }
    if let Some(rarity) = summary.get_str("rarity").filter(|r| *r != Rarity::None.name()) {
        parts.push(rarity.to_owned());
    }
    if parts.is_empty() {
        return String::new();
    }
    let mut line = parts.join(", ");
    match summary.get("attunement") {
        Some(MetaValue::Bool(true)) => line.push_str(" (requires attunement)"),
        Some(MetaValue::Str(condition)) if !condition.is_empty() => {
            line.push_str(" (requires attunement ");
            line.push_str(condition);
            line.push(')');
        }
        _ => {}
    }
    format!("*{line}*")
}
