//! Alignment codes and their combined descriptions.

/// One component of an alignment list.
///
/// `NeutralX` and `NeutralY` are the neutral points of the law/chaos and
/// good/evil axes respectively; they only appear in "any ..." style lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlignmentCode {
    Lawful,
    Neutral,
    NeutralX,
    NeutralY,
    Chaotic,
    Good,
    Evil,
    Unaligned,
    Any,
}

impl AlignmentCode {
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "L" => Some(Self::Lawful),
            "N" => Some(Self::Neutral),
            "NX" => Some(Self::NeutralX),
            "NY" => Some(Self::NeutralY),
            "C" => Some(Self::Chaotic),
            "G" => Some(Self::Good),
            "E" => Some(Self::Evil),
            "U" => Some(Self::Unaligned),
            "A" => Some(Self::Any),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Lawful => "Lawful",
            Self::Neutral | Self::NeutralX | Self::NeutralY => "Neutral",
            Self::Chaotic => "Chaotic",
            Self::Good => "Good",
            Self::Evil => "Evil",
            Self::Unaligned => "Unaligned",
            Self::Any => "Any Alignment",
        }
    }
}

/// Describe a list of alignment codes as display text.
///
/// Single codes and axis pairs read naturally (`["L", "G"]` is
/// `"Lawful Good"`). Longer lists that cover whole axes collapse to an
/// "any ..." phrase.
///
/// ```
/// use lw_codes::{AlignmentCode, describe_alignment};
///
/// let codes: Vec<_> = ["C", "E"].iter().filter_map(|c| AlignmentCode::from_code(c)).collect();
/// assert_eq!(describe_alignment(&codes), "Chaotic Evil");
/// ```
#[must_use]
pub fn describe_alignment(codes: &[AlignmentCode]) -> String {
    use AlignmentCode::{Any, Chaotic, Evil, Good, Lawful, Neutral, NeutralX, NeutralY};

    match codes {
        [] => return String::new(),
        [single] => return single.name().to_owned(),
        [Neutral, Neutral] => return "Neutral".to_owned(),
        [a, b] if !matches!(a, Any) && !matches!(b, Any) => {
            return format!("{} {}", a.name(), b.name());
        }
        _ => {}
    }

    let has = |code: AlignmentCode| codes.contains(&code);
    let ethics = [has(Lawful), has(NeutralX), has(Chaotic)];
    let morals = [has(Good), has(NeutralY), has(Evil)];
    let all_ethics = ethics.iter().all(|&b| b);
    let all_morals = morals.iter().all(|&b| b);

    let phrase = match (ethics, morals) {
        _ if all_ethics && all_morals => "Any Alignment",
        ([false, true, true], _) if all_morals => "Any Non-Lawful Alignment",
        ([true, true, false], _) if all_morals => "Any Non-Chaotic Alignment",
        (_, [false, true, true]) if all_ethics => "Any Non-Good Alignment",
        (_, [true, true, false]) if all_ethics => "Any Non-Evil Alignment",
        ([false, false, true], _) if all_morals => "Any Chaotic Alignment",
        ([true, false, false], _) if all_morals => "Any Lawful Alignment",
        (_, [true, false, false]) if all_ethics => "Any Good Alignment",
        (_, [false, false, true]) if all_ethics => "Any Evil Alignment",
        _ => {
            return codes
                .iter()
                .map(|c| c.name())
                .collect::<Vec<_>>()
                .join(" ");
        }
    };
    phrase.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(raw: &[&str]) -> Vec<AlignmentCode> {
        raw.iter().filter_map(|c| AlignmentCode::from_code(c)).collect()
    }

    #[test]
    fn test_single_codes() {
        assert_eq!(describe_alignment(&codes(&["N"])), "Neutral");
        assert_eq!(describe_alignment(&codes(&["U"])), "Unaligned");
        assert_eq!(describe_alignment(&codes(&["A"])), "Any Alignment");
    }

    #[test]
    fn test_axis_pairs() {
        assert_eq!(describe_alignment(&codes(&["L", "G"])), "Lawful Good");
        assert_eq!(describe_alignment(&codes(&["N", "E"])), "Neutral Evil");
        assert_eq!(describe_alignment(&codes(&["C", "N"])), "Chaotic Neutral");
        assert_eq!(describe_alignment(&codes(&["N", "N"])), "Neutral");
    }

    #[test]
    fn test_any_phrases() {
        assert_eq!(
            describe_alignment(&codes(&["NX", "C", "G", "NY", "E"])),
            "Any Non-Lawful Alignment"
        );
        assert_eq!(
            describe_alignment(&codes(&["L", "NX", "C", "NY", "E"])),
            "Any Non-Good Alignment"
        );
        assert_eq!(
            describe_alignment(&codes(&["C", "G", "NY", "E"])),
            "Any Chaotic Alignment"
        );
        assert_eq!(
            describe_alignment(&codes(&["L", "NX", "C", "G", "NY", "E"])),
            "Any Alignment"
        );
    }

    #[test]
    fn test_unrecognized_combination_joins_names() {
        assert_eq!(describe_alignment(&codes(&["L", "N", "E"])), "Lawful Neutral Evil");
    }

    #[test]
    fn test_empty() {
        assert_eq!(describe_alignment(&[]), "");
    }
}
