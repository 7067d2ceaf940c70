use lw_codes::Ability;
use lw_meta::MetaValue;
use lw_render::EntryRenderer;

use super::{Body, Page, summary_list};

pub(crate) fn body(page: &Page<'_>, renderer: &mut EntryRenderer) -> String {
    let summary = &page.summary;
    let mut body = Body::titled(&page.name);
    let mut traits = vec![summary_list(
        summary,
        &[("creature_types", "Creature Type"), ("size", "Size"), ("speed", "Speed")],
    )];
    if let Some(range) = summary.get("darkvision").and_then(MetaValue::as_int) {
        traits.push(format!("- **Darkvision:** {range} ft."));
    }
    let bonuses: Vec<String> = Ability::ALL
        .iter()
        .filter_map(|a| {
            let bonus = summary.get(&format!("ability_{}", a.code()))?.as_int()?;
            Some(format!("{} {bonus:+}", a.name()))
        })
        .collect();
    if !bonuses.is_empty() {
        traits.push(format!("- **Ability Scores:** {}", bonuses.join(", ")));
    }
    traits.push(summary_list(
        summary,
        &[
            ("ability_choices", "Ability Choices"),
            ("languages", "Languages"),
            ("resistances", "Resistances"),
        ],
    ));
    traits.retain(|t| !t.is_empty());
    body.push(traits.join("\n"));
    body.push_entries(renderer, page.record, "entries");
    body.finish()
}
