//! The six ability scores.

/// One of the six abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// All abilities in stat-block order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Parse a three-letter code (`"str"`) or a full name (`"strength"`).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "str" | "strength" => Some(Self::Strength),
            "dex" | "dexterity" => Some(Self::Dexterity),
            "con" | "constitution" => Some(Self::Constitution),
            "int" | "intelligence" => Some(Self::Intelligence),
            "wis" | "wisdom" => Some(Self::Wisdom),
            "cha" | "charisma" => Some(Self::Charisma),
            _ => None,
        }
    }

    /// Lowercase three-letter code used as a JSON key.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Strength => "str",
            Self::Dexterity => "dex",
            Self::Constitution => "con",
            Self::Intelligence => "int",
            Self::Wisdom => "wis",
            Self::Charisma => "cha",
        }
    }

    /// Full display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Uppercase abbreviation for stat-block headers.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Ability modifier for a score, rounding down.
    ///
    /// ```
    /// use lw_codes::Ability;
    ///
    /// assert_eq!(Ability::modifier(10), 0);
    /// assert_eq!(Ability::modifier(15), 2);
    /// assert_eq!(Ability::modifier(7), -2);
    /// ```
    #[must_use]
    pub fn modifier(score: i64) -> i64 {
        score.saturating_sub(10).div_euclid(2)
    }
}
