//! Creature size categories.

/// Size category of a creature or species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Size {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
    Gargantuan,
}

impl Size {
    /// Parse a single-letter size code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "T" => Some(Self::Tiny),
            "S" => Some(Self::Small),
            "M" => Some(Self::Medium),
            "L" => Some(Self::Large),
            "H" => Some(Self::Huge),
            "G" => Some(Self::Gargantuan),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Tiny => "Tiny",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Huge => "Huge",
            Self::Gargantuan => "Gargantuan",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Size::from_code("M"), Some(Size::Medium));
        assert_eq!(Size::from_code("G"), Some(Size::Gargantuan));
        assert_eq!(Size::from_code("X"), None);
        assert_eq!(Size::from_code("m"), None);
    }

    #[test]
    fn test_sizes_are_ordered() {
        assert!(Size::Tiny < Size::Small);
        assert!(Size::Huge < Size::Gargantuan);
    }
}
