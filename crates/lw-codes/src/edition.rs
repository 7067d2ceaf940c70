//! Ruleset editions.

/// Ruleset revision a record belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Edition {
    /// 2014 rules.
    #[default]
    Classic,
    /// 2024 rules.
    One,
}

impl Edition {
    /// Parse an edition identifier.
    ///
    /// Accepts the source data's own tags (`classic`, `one`) as well as the
    /// ruleset years and the common shorthand.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "classic" | "2014" | "5e" => Some(Self::Classic),
            "one" | "2024" | "5.5e" => Some(Self::One),
            _ => None,
        }
    }

    /// Identifier used in the source data and in output tags.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::One => "one",
        }
    }

    /// Publication year of the core rulebooks.
    #[must_use]
    pub fn year(self) -> &'static str {
        match self {
            Self::Classic => "2014",
            Self::One => "2024",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_aliases() {
        assert_eq!(Edition::from_id("2014"), Some(Edition::Classic));
        assert_eq!(Edition::from_id("classic"), Some(Edition::Classic));
        assert_eq!(Edition::from_id("ONE"), Some(Edition::One));
        assert_eq!(Edition::from_id("5.5e"), Some(Edition::One));
        assert_eq!(Edition::from_id("4e"), None);
    }
}
