//! Schools of magic.

/// School of a spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum School {
    Abjuration,
    Conjuration,
    Divination,
    Enchantment,
    Evocation,
    Illusion,
    Necromancy,
    Transmutation,
    Psionic,
}

impl School {
    /// Parse a spell school code (`"V"` is Evocation, `"E"` is Enchantment).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "A" => Some(Self::Abjuration),
            "C" => Some(Self::Conjuration),
            "D" => Some(Self::Divination),
            "E" => Some(Self::Enchantment),
            "V" => Some(Self::Evocation),
            "I" => Some(Self::Illusion),
            "N" => Some(Self::Necromancy),
            "T" => Some(Self::Transmutation),
            "P" => Some(Self::Psionic),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Abjuration => "Abjuration",
            Self::Conjuration => "Conjuration",
            Self::Divination => "Divination",
            Self::Enchantment => "Enchantment",
            Self::Evocation => "Evocation",
            Self::Illusion => "Illusion",
            Self::Necromancy => "Necromancy",
            Self::Transmutation => "Transmutation",
            Self::Psionic => "Psionic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evocation_and_enchantment_codes() {
        assert_eq!(School::from_code("V"), Some(School::Evocation));
        assert_eq!(School::from_code("E"), Some(School::Enchantment));
        assert_eq!(School::from_code("Q"), None);
    }
}
