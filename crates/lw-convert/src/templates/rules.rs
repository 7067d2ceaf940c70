use lw_meta::catalog::collection_label;
use lw_render::EntryRenderer;

use super::{Body, Page};

/// `Rules/{Collection}` for known collections, `Rules` otherwise.
pub(crate) fn folder(page: &Page<'_>) -> String {
    match page.collection.and_then(collection_label) {
        Some(label) => format!("Rules/{label}"),
        None => "Rules".to_owned(),
    }
}

pub(crate) fn body(page: &Page<'_>, renderer: &mut EntryRenderer) -> String {
    let mut body = Body::titled(&page.name);
    if let Some(rule_type) = page.summary.get_str("rule_type") {
        body.push(format!("*{rule_type} rule*"));
    }
    body.push_entries(renderer, page.record, "entries");
    body.finish()
}
