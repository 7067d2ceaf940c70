//! Source book names.

use crate::Edition;

/// A published source book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceBook {
    /// Abbreviation used in source data (`"PHB"`).
    pub code: &'static str,
    /// Full title.
    pub title: &'static str,
    /// Edition of a book that was published for both rulesets.
    ///
    /// `None` for books without a same-titled counterpart; their names are
    /// never qualified.
    pub twin: Option<Edition>,
}

const fn book(code: &'static str, title: &'static str) -> SourceBook {
    SourceBook {
        code,
        title,
        twin: None,
    }
}

const fn twin(code: &'static str, title: &'static str, edition: Edition) -> SourceBook {
    SourceBook {
        code,
        title,
        twin: Some(edition),
    }
}

static BOOKS: &[SourceBook] = &[
    twin("PHB", "Player's Handbook", Edition::Classic),
    twin("XPHB", "Player's Handbook", Edition::One),
    twin("DMG", "Dungeon Master's Guide", Edition::Classic),
    twin("XDMG", "Dungeon Master's Guide", Edition::One),
    twin("MM", "Monster Manual", Edition::Classic),
    twin("XMM", "Monster Manual", Edition::One),
    book("XGE", "Xanathar's Guide to Everything"),
    book("TCE", "Tasha's Cauldron of Everything"),
    book("VGM", "Volo's Guide to Monsters"),
    book("MTF", "Mordenkainen's Tome of Foes"),
    book("MPMM", "Mordenkainen Presents: Monsters of the Multiverse"),
    book("SCAG", "Sword Coast Adventurer's Guide"),
    book("EEPC", "Elemental Evil Player's Companion"),
    book("FTD", "Fizban's Treasury of Dragons"),
    book("BMT", "The Book of Many Things"),
    book("BGG", "Bigby Presents: Glory of the Giants"),
    book("SatO", "Sigil and the Outlands"),
    book("ERLW", "Eberron: Rising from the Last War"),
    book("EGW", "Explorer's Guide to Wildemount"),
    book("MOT", "Mythic Odysseys of Theros"),
    book("GGR", "Guildmasters' Guide to Ravnica"),
    book("AI", "Acquisitions Incorporated"),
    book("CoS", "Curse of Strahd"),
    book("LMoP", "Lost Mine of Phandelver"),
    book("ToA", "Tomb of Annihilation"),
    book("WDH", "Waterdeep: Dragon Heist"),
    book("BGDIA", "Baldur's Gate: Descent into Avernus"),
    book("HotDQ", "Hoard of the Dragon Queen"),
    book("FRHoF", "Forgotten Realms: Heroes of Faerun"),
];

impl SourceBook {
    /// Look up a book by code, ignoring ASCII case.
    #[must_use]
    pub fn lookup(code: &str) -> Option<&'static SourceBook> {
        let code = code.trim();
        BOOKS.iter().find(|b| b.code.eq_ignore_ascii_case(code))
    }

    /// Title qualified with the edition year for twin books.
    #[must_use]
    pub fn qualified_title(&self) -> String {
        match self.twin {
            Some(edition) => format!("{} ({})", self.title, edition.year()),
            None => self.title.to_owned(),
        }
    }
}

/// Expand a source code to its full, edition-qualified name.
///
/// Rules documents whose name depends on the ruleset (`SRD`, `Basic`) are
/// resolved against `edition`. Returns `None` for codes outside the table.
///
/// ```
/// use lw_codes::{Edition, expand_source};
///
/// assert_eq!(expand_source("PHB", Edition::One).as_deref(), Some("Player's Handbook (2014)"));
/// assert_eq!(expand_source("SRD", Edition::One).as_deref(), Some("System Reference Document 5.2"));
/// ```
#[must_use]
pub fn expand_source(code: &str, edition: Edition) -> Option<String> {
    let code = code.trim();
    if code.eq_ignore_ascii_case("SRD") {
        return Some(
            match edition {
                Edition::Classic => "System Reference Document 5.1",
                Edition::One => "System Reference Document 5.2",
            }
            .to_owned(),
        );
    }
    if code.eq_ignore_ascii_case("Basic") || code.eq_ignore_ascii_case("FreeRules") {
        return Some(
            match edition {
                Edition::Classic => "Basic Rules (2014)",
                Edition::One => "Free Rules (2024)",
            }
            .to_owned(),
        );
    }
    SourceBook::lookup(code).map(SourceBook::qualified_title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twins_are_qualified() {
        assert_eq!(
            expand_source("XPHB", Edition::Classic).as_deref(),
            Some("Player's Handbook (2024)")
        );
        assert_eq!(
            expand_source("mm", Edition::One).as_deref(),
            Some("Monster Manual (2014)")
        );
    }

    #[test]
    fn test_single_edition_books_are_plain() {
        assert_eq!(
            expand_source("XGE", Edition::One).as_deref(),
            Some("Xanathar's Guide to Everything")
        );
    }

    #[test]
    fn test_edition_dependent_documents() {
        assert_eq!(
            expand_source("SRD", Edition::Classic).as_deref(),
            Some("System Reference Document 5.1")
        );
        assert_eq!(
            expand_source("Basic", Edition::One).as_deref(),
            Some("Free Rules (2024)")
        );
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(expand_source("HOMEBREW", Edition::Classic), None);
    }
}
