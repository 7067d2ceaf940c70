//! Cross-document link naming.
//!
//! Link targets and document file names go through the same
//! [`sanitize_name`], so a reference always names an existing document.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that cannot appear in a vault file name.
static PATH_HOSTILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|#^\[\]]"#).expect("invalid path-hostile regex"));

/// How references to other documents are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LinkStyle {
    /// `[[Target]]`, `[[Target|Label]]`, `[[Target#Anchor|Label]]`.
    #[default]
    Wiki,
    /// Visible label only.
    Plain,
}

impl LinkStyle {
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "wiki" => Some(Self::Wiki),
            "plain" => Some(Self::Plain),
            _ => None,
        }
    }
}

/// Document name with path-hostile characters removed and whitespace
/// collapsed. Leading dots are dropped so no name resolves to `.` or `..`;
/// a name with nothing left becomes `Unnamed`.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    let cleaned = PATH_HOSTILE.replace_all(name, "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed.trim_start_matches(|c: char| c == '.' || c.is_whitespace());
    if trimmed.is_empty() {
        "Unnamed".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Write a link to `target`, optionally anchored and labelled.
///
/// The target is sanitized to the document name. The label defaults to the
/// anchor when present, otherwise to the target as written.
#[must_use]
pub fn link(style: LinkStyle, target: &str, anchor: Option<&str>, label: Option<&str>) -> String {
    let label = label.filter(|l| !l.is_empty());
    match style {
        LinkStyle::Plain => label.or(anchor).unwrap_or(target).to_owned(),
        LinkStyle::Wiki => {
            let document = sanitize_name(target);
            let mut out = String::from("[[");
            out.push_str(&document);
            if let Some(anchor) = anchor {
                out.push('#');
                out.push_str(anchor);
            }
            let shown = label.or(anchor).unwrap_or(target);
            if shown.trim() != document {
                out.push('|');
                out.push_str(shown);
            }
            out.push_str("]]");
            out
        }
    }
}

/// Document name for a class.
#[must_use]
pub fn class_document_name(class: &str) -> String {
    sanitize_name(class)
}

/// Document name for a subclass, keyed by its short name.
#[must_use]
pub fn subclass_document_name(class: &str, subclass_short: &str) -> String {
    sanitize_name(&format!("{} ({})", class.trim(), subclass_short.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiki_links() {
        assert_eq!(link(LinkStyle::Wiki, "Fireball", None, None), "[[Fireball]]");
        assert_eq!(link(LinkStyle::Wiki, "Goblin", None, Some("goblins")), "[[Goblin|goblins]]");
        assert_eq!(link(LinkStyle::Wiki, "Goblin", None, Some("Goblin")), "[[Goblin]]");
        assert_eq!(
            link(LinkStyle::Wiki, "Wizard", Some("Arcane Recovery"), None),
            "[[Wizard#Arcane Recovery|Arcane Recovery]]"
        );
    }

    #[test]
    fn test_plain_links() {
        assert_eq!(link(LinkStyle::Plain, "Goblin", None, Some("goblins")), "goblins");
        assert_eq!(link(LinkStyle::Plain, "Wizard", Some("Arcane Recovery"), None), "Arcane Recovery");
        assert_eq!(link(LinkStyle::Plain, "Rope", None, Some("")), "Rope");
    }

    #[test]
    fn test_document_names() {
        assert_eq!(class_document_name("Wizard"), "Wizard");
        assert_eq!(subclass_document_name("Wizard", "Evocation"), "Wizard (Evocation)");
    }

    #[test]
    fn test_link_target_matches_document_name() {
        assert_eq!(
            link(LinkStyle::Wiki, "Antipathy/Sympathy", None, None),
            "[[AntipathySympathy|Antipathy/Sympathy]]"
        );
        assert_eq!(
            link(LinkStyle::Wiki, "Bigby's Hand: Grasping", None, Some("hand")),
            "[[Bigby's Hand Grasping|hand]]"
        );
        assert_eq!(
            link(LinkStyle::Wiki, "Fighter: Variant", Some("Second Wind"), None),
            "[[Fighter Variant#Second Wind|Second Wind]]"
        );
        assert_eq!(link(LinkStyle::Plain, "Antipathy/Sympathy", None, None), "Antipathy/Sympathy");
        assert_eq!(class_document_name("Fighter: Variant"), "Fighter Variant");
        assert_eq!(subclass_document_name("Wizard", "War/Magic"), "Wizard (WarMagic)");
    }

    #[test]
    fn test_sanitize_removes_hostile_characters() {
        assert_eq!(sanitize_name("Bigby's Hand: Grasping"), "Bigby's Hand Grasping");
        assert_eq!(sanitize_name("Wand of [Web] #2 ^x"), "Wand of Web 2 x");
        assert_eq!(sanitize_name("a/b\\c*d?e\"f<g>h|i"), "abcdefghi");
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize_name("  Potion   of\tHealing "), "Potion of Healing");
        assert_eq!(sanitize_name(" / "), "Unnamed");
    }

    #[test]
    fn test_sanitize_rejects_dot_names() {
        assert_eq!(sanitize_name(".."), "Unnamed");
        assert_eq!(sanitize_name(". . ."), "Unnamed");
        assert_eq!(sanitize_name(".hidden"), "hidden");
        assert_eq!(sanitize_name("Potion of Healing."), "Potion of Healing.");
        assert_eq!(sanitize_name(&sanitize_name(". .x")), sanitize_name(". .x"));
    }

    #[test]
    fn test_style_from_id() {
        assert_eq!(LinkStyle::from_id("Wiki"), Some(LinkStyle::Wiki));
        assert_eq!(LinkStyle::from_id("markdown"), None);
    }
}
