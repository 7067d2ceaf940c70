use lw_codes::Edition;
use lw_meta::MetaValue;
use lw_render::EntryRenderer;

use super::{Body, Page, Settings, ordinal, summary_list};

pub(crate) fn folder(page: &Page<'_>) -> String {
    match page.summary.get("level").and_then(MetaValue::as_int) {
        Some(0) => "Spells/Cantrips".to_owned(),
        Some(level) => format!("Spells/Level {level}"),
        None => "Spells/Unknown Level".to_owned(),
    }
}

/// `Evocation Cantrip`, `3rd-level Evocation` or `Level 3 Evocation`.
pub(crate) fn subtitle(level: Option<i64>, school: Option<&str>, edition: Edition) -> String {
    let school = school.unwrap_or("Spell");
    match (level, edition) {
        (Some(0), _) => format!("{school} Cantrip"),
        (Some(level), Edition::Classic) => format!("{}-level {school}", ordinal(level)),
        (Some(level), Edition::One) => format!("Level {level} {school}"),
        (None, _) => school.to_owned(),
    }
}

pub(crate) fn body(page: &Page<'_>, settings: &Settings, renderer: &mut EntryRenderer) -> String {
    let summary = &page.summary;
    let mut subtitle = subtitle(
        summary.get("level").and_then(MetaValue::as_int),
        summary.get_str("school"),
        settings.edition,
    );
    if summary.get("ritual") == Some(&MetaValue::Bool(true)) {
        subtitle.push_str(" (Ritual)");
    }

    let mut body = Body::titled(&page.name);
    body.push(format!("### *{subtitle}*"));
    body.push(summary_list(summary, &[("casting_time", "Casting Time"), ("range", "Range")]));
    body.push(components_line(page));
    body.push(summary_list(summary, &[("duration", "Duration"), ("classes", "Classes")]));
    body.push_entries(renderer, page.record, "entries");
    body.push_entries(renderer, page.record, "entriesHigherLevel");
    body.finish()
}

/// `- **Components:** V, S, M (a pinch of sulfur)`.
fn components_line(page: &Page<'_>) -> String {
    let Some(MetaValue::List(components)) = page.summary.get("components") else {
        return String::new();
    };
    if components.is_empty() {
        return String::new();
    }
    let material = page.summary.get_str("material");
    let parts: Vec<String> = components
        .iter()
        .map(|c| match (c.as_str(), material) {
            ("M", Some(material)) => format!("M ({material})"),
            _ => c.clone(),
        })
        .collect();
    format!("- **Components:** {}", parts.join(", "))
}
