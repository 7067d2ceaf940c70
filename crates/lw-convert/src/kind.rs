//! Content kinds.

use std::fmt;

/// Category of record a batch converts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Spell,
    Creature,
    Item,
    /// Classes, with their subclasses as extra documents.
    Class,
    Species,
    Background,
    /// Conditions, diseases, statuses, actions and variant rules.
    RulesTopic,
}

impl ContentKind {
    /// Every kind, in the order they are listed to users.
    pub const ALL: [ContentKind; 7] = [
        Self::Spell,
        Self::Creature,
        Self::Item,
        Self::Class,
        Self::Species,
        Self::Background,
        Self::RulesTopic,
    ];

    /// Identifiers accepted by [`ContentKind::from_id`].
    pub const IDS: &'static [&'static str] = &[
        "spell",
        "creature",
        "item",
        "class",
        "species",
        "background",
        "rules",
    ];

    /// Parse a kind identifier. Common synonyms of the source data are
    /// accepted (`monster`, `race`, `rule`).
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "spell" | "spells" => Some(Self::Spell),
            "creature" | "creatures" | "monster" | "bestiary" => Some(Self::Creature),
            "item" | "items" => Some(Self::Item),
            "class" | "classes" => Some(Self::Class),
            "species" | "race" | "races" => Some(Self::Species),
            "background" | "backgrounds" => Some(Self::Background),
            "rules" | "rule" | "rules-topic" => Some(Self::RulesTopic),
            _ => None,
        }
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Spell => "spell",
            Self::Creature => "creature",
            Self::Item => "item",
            Self::Class => "class",
            Self::Species => "species",
            Self::Background => "background",
            Self::RulesTopic => "rules",
        }
    }

    /// Top-level collections read from a source file, in order.
    #[must_use]
    pub fn collections(self) -> &'static [&'static str] {
        match self {
            Self::Spell => &["spell"],
            Self::Creature => &["monster"],
            Self::Item => &["item", "baseitem"],
            Self::Class => &["class"],
            Self::Species => &["race", "species"],
            Self::Background => &["background"],
            Self::RulesTopic => &["variantrule", "condition", "disease", "status", "action"],
        }
    }

    /// Tag written into every document of this kind.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::RulesTopic => "rule",
            other => other.id(),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
