//! Recursive entry tree renderer.

use lw_tags::{TagContext, interpolate, interpolate_value, link, strip_tags};
use serde_json::Value;
use tracing::warn;

use crate::MAX_HEADING_DEPTH;
use crate::node::{AbilityFormula, CrossRef, CrossRefKind, EntryNode, FormulaKind};

/// Result of rendering an entry tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderResult {
    /// Rendered Markdown, without trailing newline.
    pub text: String,
    /// Degraded paths taken while rendering (table shape mismatches,
    /// unrecognised entry shapes).
    pub warnings: Vec<String>,
}

/// Markdown renderer for [`EntryNode`] trees.
///
/// A renderer is created per record. It holds only the tag options and the
/// warnings collected during its own calls.
///
/// Heading depth is always passed explicitly: `depth` is the heading level of
/// the enclosing context, so a named section rendered at depth 1 emits `##`.
#[derive(Debug)]
pub struct EntryRenderer {
    pub(crate) tags: TagContext,
    pub(crate) warnings: Vec<String>,
}

impl EntryRenderer {
    #[must_use]
    pub fn new(tags: TagContext) -> Self {
        Self {
            tags,
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn tags(&self) -> &TagContext {
        &self.tags
    }

    /// Consume the renderer, returning its warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }

    /// Render one node and return it together with the collected warnings.
    #[must_use]
    pub fn render_document(mut self, node: &EntryNode, depth: usize) -> RenderResult {
        let text = self.render(node, depth);
        RenderResult {
            text,
            warnings: self.warnings,
        }
    }

    /// Render a sequence of sibling nodes separated by blank lines.
    pub fn render_all(&mut self, nodes: &[EntryNode], depth: usize) -> String {
        let mut parts = Vec::with_capacity(nodes.len());
        for node in nodes {
            let text = self.render(node, depth);
            if !text.is_empty() {
                parts.push(text);
            }
        }
        parts.join("\n\n")
    }

    /// Decode and render a raw JSON body field.
    pub fn render_value(&mut self, value: &Value, depth: usize) -> String {
        self.render(&EntryNode::decode(value), depth)
    }

    /// Interpolate a text fragment with this renderer's tag options.
    pub fn text(&self, text: &str) -> String {
        interpolate(text, &self.tags)
    }

    pub(crate) fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Render one node.
    pub fn render(&mut self, node: &EntryNode, depth: usize) -> String {
        match node {
            EntryNode::Text(s) => {
                let text = interpolate(s, &self.tags);
                let text = text.trim();
                if text == "}" {
                    String::new()
                } else {
                    text.to_owned()
                }
            }
            EntryNode::List(items) => self.render_list(items, depth),
            EntryNode::Table(table) => self.render_table(table, depth),
            EntryNode::Section { name, children } => match name {
                Some(name) => {
                    let heading = heading(depth + 1, &strip_tags(name));
                    let body = self.render_all(children, depth + 1);
                    join_blocks([heading, body])
                }
                None => self.render_all(children, depth),
            },
            EntryNode::Named { name, children } => self.render_named(name, children, depth),
            EntryNode::Inset { name, children } => {
                let title = name
                    .as_deref()
                    .map(|n| format!("**{}**", strip_tags(n)))
                    .unwrap_or_default();
                let body = self.render_all(children, depth);
                blockquote(&join_blocks([title, body]))
            }
            EntryNode::Quote { children, author } => {
                let body = self.render_all(children, depth);
                let attribution = author
                    .as_deref()
                    .map(|a| format!("\u{2014} {}", interpolate(a, &self.tags)))
                    .unwrap_or_default();
                blockquote(&join_blocks([body, attribution]))
            }
            EntryNode::CrossRef(cross_ref) => self.render_cross_ref(cross_ref),
            EntryNode::Inline(children) => {
                let mut out = String::new();
                for child in children {
                    match child {
                        EntryNode::Text(s) => out.push_str(&interpolate(s, &self.tags)),
                        other => out.push_str(&self.render(other, depth)),
                    }
                }
                out.trim().to_owned()
            }
            EntryNode::Rule => "---".to_owned(),
            EntryNode::AbilityFormula(formula) => render_formula(formula),
            EntryNode::Unknown(value) => {
                let kind = value.get("type").and_then(Value::as_str).unwrap_or("untyped");
                warn!(entry_type = kind, "Unrecognised entry shape, rendering as text");
                self.warn(format!("unrecognised entry shape ({kind})"));
                interpolate_value(value, &self.tags)
            }
        }
    }

    fn render_list(&mut self, items: &[EntryNode], depth: usize) -> String {
        let mut lines = Vec::new();
        for item in items {
            let text = self.render(item, depth);
            let nested = matches!(item, EntryNode::List(_));
            for (i, line) in text.lines().enumerate() {
                if i == 0 && !nested {
                    lines.push(format!("- {line}"));
                } else if line.is_empty() {
                    lines.push(String::new());
                } else {
                    lines.push(format!("  {line}"));
                }
            }
        }
        lines.join("\n")
    }

    fn render_named(&mut self, name: &str, children: &[EntryNode], depth: usize) -> String {
        let name = strip_tags(name);
        let lead = if name.ends_with(['.', '!', '?', ':']) {
            format!("**{name}**")
        } else {
            format!("**{name}.**")
        };
        let body = self.render_all(children, depth);
        if body.is_empty() {
            return lead;
        }
        match children.first() {
            Some(EntryNode::Text(_) | EntryNode::Inline(_) | EntryNode::CrossRef(_)) => {
                format!("{lead} {body}")
            }
            _ => format!("{lead}\n\n{body}"),
        }
    }

    fn render_cross_ref(&self, cross_ref: &CrossRef) -> String {
        match (&cross_ref.document, cross_ref.kind) {
            (Some(document), CrossRefKind::ClassFeature | CrossRefKind::SubclassFeature) => {
                link(self.tags.links, document, Some(&cross_ref.name), None)
            }
            _ => link(self.tags.links, &cross_ref.name, None, None),
        }
    }
}

/// Render a raw JSON body with a fresh renderer.
#[must_use]
pub fn render_value(value: &Value, tags: TagContext, depth: usize) -> RenderResult {
    EntryRenderer::new(tags).render_document(&EntryNode::decode(value), depth)
}

/// Heading line at `level`, capped at the deepest Markdown heading.
pub(crate) fn heading(level: usize, name: &str) -> String {
    let level = level.clamp(1, MAX_HEADING_DEPTH);
    format!("{} {}", "#".repeat(level), name.trim())
}

fn join_blocks<const N: usize>(blocks: [String; N]) -> String {
    blocks
        .into_iter()
        .filter(|b| !b.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn blockquote(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                ">".to_owned()
            } else {
                format!("> {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_formula(formula: &AbilityFormula) -> String {
    let abilities = if formula.abilities.is_empty() {
        "spellcasting ability".to_owned()
    } else {
        formula
            .abilities
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(" or ")
    };
    match formula.kind {
        FormulaKind::SaveDc => format!(
            "**{} save DC** = 8 + your proficiency bonus + your {abilities} modifier",
            formula.name
        ),
        FormulaKind::AttackModifier => format!(
            "**{} attack modifier** = your proficiency bonus + your {abilities} modifier",
            formula.name
        ),
    }
}
