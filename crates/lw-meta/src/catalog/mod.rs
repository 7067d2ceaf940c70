//! Built-in field catalogs, one per catalog kind.
//!
//! Each catalog lists every field it can derive in canonical order. The
//! fields a default schema includes can differ by edition; those differences
//! are declared on the field definitions (`only`, `optional`) so they are
//! visible in one place.

mod background;
mod class;
mod creature;
mod item;
mod rules;
mod species;
mod spell;

pub use background::background;
pub use class::{class, subclass};
pub use creature::creature;
pub use item::item;
pub use rules::{collection_label, rules};
pub use species::species;
pub use spell::spell;

use crate::FieldCatalog;

/// Names accepted by [`by_name`].
pub const CATALOG_NAMES: &[&str] = &[
    "spell",
    "creature",
    "item",
    "class",
    "subclass",
    "species",
    "background",
    "rules",
];

/// Catalog by name.
#[must_use]
pub fn by_name(name: &str) -> Option<FieldCatalog> {
    let catalog = match name {
        "spell" => spell(),
        "creature" => creature(),
        "item" => item(),
        "class" => class(),
        "subclass" => subclass(),
        "species" => species(),
        "background" => background(),
        "rules" => rules(),
        _ => return None,
    };
    Some(catalog)
}
