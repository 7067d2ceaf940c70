//! Per-kind document templates.
//!
//! A template decides three things for a record: whether it passes the kind's
//! validity gate, which folder its document goes to, and how the body reads.
//! Templates only read the record and the projected summary; they never
//! write to either.

pub(crate) mod background;
pub(crate) mod class;
pub(crate) mod creature;
pub(crate) mod item;
pub(crate) mod rules;
pub(crate) mod species;
pub(crate) mod spell;

use lw_codes::Edition;
use lw_config::BestiaryConfig;
use lw_meta::MetadataMap;
use lw_render::{EntryNode, EntryRenderer};
use serde_json::Value;

use crate::ContentKind;
use crate::source::SourceFile;

/// Batch-wide options the templates read.
#[derive(Clone, Debug, Default)]
pub(crate) struct Settings {
    pub edition: Edition,
    pub bestiary: BestiaryConfig,
}

/// A record being assembled.
pub(crate) struct Page<'a> {
    pub record: &'a Value,
    pub collection: Option<&'static str>,
    /// Display name, tags stripped.
    pub name: String,
    /// Projection over the kind's full default field list; body summary lines
    /// read from here so frontmatter overrides do not change the body.
    pub summary: MetadataMap,
}

/// Reason a record is excluded, or `None` when it passes.
pub(crate) fn gate(kind: ContentKind, page: &Page<'_>) -> Option<String> {
    match kind {
        ContentKind::Creature => creature::gate(page),
        _ => None,
    }
}

/// One document a record expands to, before its metadata is attached.
pub(crate) struct Draft<'a> {
    pub folder: String,
    pub name: String,
    pub body: String,
    /// Record the document's metadata is projected from.
    pub origin: Origin<'a>,
}

#[derive(Clone, Copy)]
pub(crate) enum Origin<'a> {
    /// The page's own record.
    Page,
    /// A subclass record attached to a class page.
    Subclass(&'a Value),
}

/// Drafts for every document `page` expands to.
pub(crate) fn render<'a>(
    kind: ContentKind,
    page: &Page<'a>,
    file: &SourceFile<'a>,
    settings: &Settings,
    renderer: &mut EntryRenderer,
) -> Vec<Draft<'a>> {
    let single = |folder: String, body: String| Draft {
        folder,
        name: page.name.clone(),
        body,
        origin: Origin::Page,
    };
    match kind {
        ContentKind::Spell => vec![single(spell::folder(page), spell::body(page, settings, renderer))],
        ContentKind::Creature => vec![single(
            creature::folder(page, &settings.bestiary),
            creature::body(page, renderer),
        )],
        ContentKind::Item => vec![single(item::folder(page), item::body(page, renderer))],
        ContentKind::Class => class::drafts(page, file, renderer),
        ContentKind::Species => vec![single("Species".to_owned(), species::body(page, renderer))],
        ContentKind::Background => {
            vec![single("Backgrounds".to_owned(), background::body(page, renderer))]
        }
        ContentKind::RulesTopic => vec![single(rules::folder(page), rules::body(page, renderer))],
    }
}

/// Blocks of a document body, joined by blank lines.
pub(crate) struct Body {
    blocks: Vec<String>,
}

impl Body {
    /// Body starting with a `# title` line.
    pub(crate) fn titled(title: &str) -> Self {
        Self {
            blocks: vec![format!("# {title}")],
        }
    }

    /// Add a block; empty blocks are dropped.
    pub(crate) fn push(&mut self, block: impl Into<String>) -> &mut Self {
        let block = block.into();
        let block = block.trim_end();
        if !block.trim().is_empty() {
            self.blocks.push(block.to_owned());
        }
        self
    }

    /// Render `record[key]` as entries under the document title.
    pub(crate) fn push_entries(
        &mut self,
        renderer: &mut EntryRenderer,
        record: &Value,
        key: &str,
    ) -> &mut Self {
        if let Some(value) = record.get(key) {
            let nodes = EntryNode::decode_list(value);
            let text = renderer.render_all(&nodes, 1);
            self.push(text);
        }
        self
    }

    pub(crate) fn finish(self) -> String {
        self.blocks.join("\n\n")
    }
}

/// `- **Label:** value` lines for the summary keys that are present.
pub(crate) fn summary_list(summary: &MetadataMap, fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .filter_map(|(key, label)| {
            let value = summary.get(key)?;
            (!value.is_empty()).then(|| format!("- **{label}:** {}", value.display()))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode a list of `{name, entries}` blocks as bold lead-in paragraphs.
///
/// Blocks without a name decode as ordinary entries.
pub(crate) fn named_blocks(value: &Value) -> Vec<EntryNode> {
    let Some(items) = value.as_array() else {
        return EntryNode::decode_list(value);
    };
    items
        .iter()
        .map(|item| match item.get("name").and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => EntryNode::Named {
                name: name.to_owned(),
                children: item
                    .get("entries")
                    .map(EntryNode::decode_list)
                    .unwrap_or_default(),
            },
            _ => EntryNode::decode(item),
        })
        .collect()
}

/// `1st`, `2nd`, `3rd`, `4th`...
pub(crate) fn ordinal(n: i64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use lw_tags::TagContext;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_ordinal() {
        let got: Vec<String> = [1, 2, 3, 4, 9, 11, 12, 13, 21].into_iter().map(ordinal).collect();
        assert_eq!(
            got,
            vec!["1st", "2nd", "3rd", "4th", "9th", "11th", "12th", "13th", "21st"]
        );
    }

    #[test]
    fn test_summary_list_skips_missing() {
        let mut summary = MetadataMap::new();
        summary.append("range", "60 feet");
        summary.append("classes", Vec::<String>::new());
        let text = summary_list(
            &summary,
            &[("casting_time", "Casting Time"), ("range", "Range"), ("classes", "Classes")],
        );
        assert_eq!(text, "- **Range:** 60 feet");
    }

    #[test]
    fn test_named_blocks() {
        let mut renderer = EntryRenderer::new(TagContext::default());
        let nodes = named_blocks(&json!([
            {"name": "Nimble Escape", "entries": ["The goblin can take the Disengage action."]},
            "Plain text."
        ]));
        assert_eq!(
            renderer.render_all(&nodes, 1),
            "**Nimble Escape.** The goblin can take the Disengage action.\n\nPlain text."
        );
    }

    #[test]
    fn test_body_drops_empty_blocks() {
        let mut body = Body::titled("Acolyte");
        body.push("").push("  \n").push("Text.\n");
        assert_eq!(body.finish(), "# Acolyte\n\nText.");
    }
}
