//! Code tables for tabletop content records.
//!
//! Source JSON abbreviates most enumerated values: sizes are `"M"`, spell
//! schools are `"V"`, alignments are lists like `["L", "G"]`, item types are
//! `"HA|XPHB"`. Each table here is an enum with an exhaustive `match` for
//! its display name, so adding a code without a name is a compile error rather
//! than a silent passthrough.
//!
//! Parsing is always fallible (`from_code` returns `Option`); callers decide
//! how to degrade when a record carries a code outside the table.

mod ability;
mod alignment;
mod damage;
mod edition;
mod item;
mod school;
mod size;
mod source;

pub use ability::Ability;
pub use alignment::{AlignmentCode, describe_alignment};
pub use damage::DamageType;
pub use edition::Edition;
pub use item::{ItemProperty, ItemType, Rarity};
pub use school::School;
pub use size::Size;
pub use source::{SourceBook, expand_source};

/// Strip a `|source` suffix from a code (`"HA|XPHB"` -> `"HA"`).
#[must_use]
pub fn strip_source_suffix(code: &str) -> &str {
    code.split('|').next().unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_source_suffix() {
        assert_eq!(strip_source_suffix("HA|XPHB"), "HA");
        assert_eq!(strip_source_suffix("M"), "M");
        assert_eq!(strip_source_suffix(""), "");
    }
}
