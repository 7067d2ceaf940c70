use lw_render::EntryRenderer;

use super::{Body, Page, summary_list};

pub(crate) fn body(page: &Page<'_>, renderer: &mut EntryRenderer) -> String {
    let mut body = Body::titled(&page.name);
    body.push(summary_list(
        &page.summary,
        &[
            ("skills", "Skill Proficiencies"),
            ("skill_choices", "Skill Choices"),
            ("tools", "Tool Proficiencies"),
            ("tool_choices", "Tool Choices"),
            ("languages", "Languages"),
            ("feats", "Feat"),
        ],
    ));
    body.push_entries(renderer, page.record, "entries");
    body.finish()
}
