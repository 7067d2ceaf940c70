//! Title casing for reference names.

const MINOR_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "from", "in", "into", "nor", "of", "on",
    "or", "the", "to", "vs", "with",
];

/// Title-case a name.
///
/// Capitalizes the first letter of each word and of each hyphenated part.
/// Minor words stay lowercase unless they start the name. Letters after the
/// first are left as written, so `"CR 1/2"` is unchanged.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in s.split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if i > 0 && MINOR_WORDS.contains(&word.to_lowercase().as_str()) {
            out.push_str(&word.to_lowercase());
            continue;
        }
        let mut capitalize = true;
        for c in word.chars() {
            if capitalize && c.is_alphabetic() {
                out.extend(c.to_uppercase());
                capitalize = false;
            } else {
                out.push(c);
                if matches!(c, '-' | '(' | '/') {
                    capitalize = true;
                } else if c.is_alphanumeric() {
                    capitalize = false;
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("fireball"), "Fireball");
        assert_eq!(title_case("cure wounds"), "Cure Wounds");
        assert_eq!(title_case("wand of the war mage"), "Wand of the War Mage");
        assert_eq!(title_case("the tortle"), "The Tortle");
        assert_eq!(title_case("half-elf"), "Half-Elf");
    }

    #[test]
    fn test_title_case_keeps_inner_letters() {
        assert_eq!(title_case("CR 1/2"), "CR 1/2");
        assert_eq!(title_case("Tasha's hideous laughter"), "Tasha's Hideous Laughter");
        assert_eq!(title_case("+1 longsword"), "+1 Longsword");
    }
}
