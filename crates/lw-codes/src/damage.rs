//! Damage types.

/// Damage type, parsed from single-letter item codes or full names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DamageType {
    Acid,
    Bludgeoning,
    Cold,
    Fire,
    Force,
    Lightning,
    Necrotic,
    Piercing,
    Poison,
    Psychic,
    Radiant,
    Slashing,
    Thunder,
}

impl DamageType {
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        let damage = match code {
            "A" => Self::Acid,
            "B" => Self::Bludgeoning,
            "C" => Self::Cold,
            "F" => Self::Fire,
            "O" => Self::Force,
            "L" => Self::Lightning,
            "N" => Self::Necrotic,
            "P" => Self::Piercing,
            "I" => Self::Poison,
            "Y" => Self::Psychic,
            "R" => Self::Radiant,
            "S" => Self::Slashing,
            "T" => Self::Thunder,
            _ => return Self::from_name(code),
        };
        Some(damage)
    }

    fn from_name(name: &str) -> Option<Self> {
        let damage = match name.to_ascii_lowercase().as_str() {
            "acid" => Self::Acid,
            "bludgeoning" => Self::Bludgeoning,
            "cold" => Self::Cold,
            "fire" => Self::Fire,
            "force" => Self::Force,
            "lightning" => Self::Lightning,
            "necrotic" => Self::Necrotic,
            "piercing" => Self::Piercing,
            "poison" => Self::Poison,
            "psychic" => Self::Psychic,
            "radiant" => Self::Radiant,
            "slashing" => Self::Slashing,
            "thunder" => Self::Thunder,
            _ => return None,
        };
        Some(damage)
    }

    /// Lowercase name as used in running text.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Acid => "acid",
            Self::Bludgeoning => "bludgeoning",
            Self::Cold => "cold",
            Self::Fire => "fire",
            Self::Force => "force",
            Self::Lightning => "lightning",
            Self::Necrotic => "necrotic",
            Self::Piercing => "piercing",
            Self::Poison => "poison",
            Self::Psychic => "psychic",
            Self::Radiant => "radiant",
            Self::Slashing => "slashing",
            Self::Thunder => "thunder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_names() {
        assert_eq!(DamageType::from_code("S"), Some(DamageType::Slashing));
        assert_eq!(DamageType::from_code("Y"), Some(DamageType::Psychic));
        assert_eq!(DamageType::from_code("Fire"), Some(DamageType::Fire));
        assert_eq!(DamageType::from_code("X"), None);
    }
}
