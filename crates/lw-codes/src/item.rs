//! Item type, property and rarity tables.

/// Item type code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemType {
    MeleeWeapon,
    RangedWeapon,
    Ammunition,
    LightArmor,
    MediumArmor,
    HeavyArmor,
    Shield,
    Potion,
    Scroll,
    Wand,
    Rod,
    Ring,
    Staff,
    AdventuringGear,
    Treasure,
    ArtObject,
    Gemstone,
    Coinage,
    ArtisansTools,
    Tools,
    Instrument,
    GamingSet,
    SpellcastingFocus,
    Mount,
    LandVehicle,
    WaterVehicle,
    AirVehicle,
    TackAndHarness,
    TradeGood,
    FoodAndDrink,
    Explosive,
    Other,
}

impl ItemType {
    /// Parse an item type code, ignoring any `|source` suffix.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let item_type = match crate::strip_source_suffix(code).trim() {
            "M" => Self::MeleeWeapon,
            "R" => Self::RangedWeapon,
            "A" | "AF" => Self::Ammunition,
            "LA" => Self::LightArmor,
            "MA" => Self::MediumArmor,
            "HA" => Self::HeavyArmor,
            "S" => Self::Shield,
            "P" => Self::Potion,
            "SC" => Self::Scroll,
            "WD" => Self::Wand,
            "RD" => Self::Rod,
            "RG" => Self::Ring,
            "ST" => Self::Staff,
            "G" => Self::AdventuringGear,
            "$" => Self::Treasure,
            "$A" => Self::ArtObject,
            "$G" => Self::Gemstone,
            "$C" => Self::Coinage,
            "AT" => Self::ArtisansTools,
            "T" => Self::Tools,
            "INS" => Self::Instrument,
            "GS" => Self::GamingSet,
            "SCF" => Self::SpellcastingFocus,
            "MNT" => Self::Mount,
            "VEH" => Self::LandVehicle,
            "SHP" => Self::WaterVehicle,
            "AIR" => Self::AirVehicle,
            "TAH" => Self::TackAndHarness,
            "TG" => Self::TradeGood,
            "FD" => Self::FoodAndDrink,
            "EXP" => Self::Explosive,
            "OTH" => Self::Other,
            _ => return None,
        };
        Some(item_type)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MeleeWeapon => "Melee Weapon",
            Self::RangedWeapon => "Ranged Weapon",
            Self::Ammunition => "Ammunition",
            Self::LightArmor => "Light Armor",
            Self::MediumArmor => "Medium Armor",
            Self::HeavyArmor => "Heavy Armor",
            Self::Shield => "Shield",
            Self::Potion => "Potion",
            Self::Scroll => "Scroll",
            Self::Wand => "Wand",
            Self::Rod => "Rod",
            Self::Ring => "Ring",
            Self::Staff => "Staff",
            Self::AdventuringGear => "Adventuring Gear",
            Self::Treasure => "Treasure",
            Self::ArtObject => "Art Object",
            Self::Gemstone => "Gemstone",
            Self::Coinage => "Coinage",
            Self::ArtisansTools => "Artisan's Tools",
            Self::Tools => "Tools",
            Self::Instrument => "Instrument",
            Self::GamingSet => "Gaming Set",
            Self::SpellcastingFocus => "Spellcasting Focus",
            Self::Mount => "Mount",
            Self::LandVehicle => "Vehicle (Land)",
            Self::WaterVehicle => "Vehicle (Water)",
            Self::AirVehicle => "Vehicle (Air)",
            Self::TackAndHarness => "Tack and Harness",
            Self::TradeGood => "Trade Good",
            Self::FoodAndDrink => "Food and Drink",
            Self::Explosive => "Explosive",
            Self::Other => "Other",
        }
    }

    /// Output folder for items of this type.
    #[must_use]
    pub fn folder(self) -> &'static str {
        match self {
            Self::MeleeWeapon | Self::RangedWeapon | Self::Explosive => "Weapons",
            Self::Ammunition => "Ammunition",
            Self::LightArmor | Self::MediumArmor | Self::HeavyArmor | Self::Shield => "Armor",
            Self::Potion => "Potions",
            Self::Scroll => "Scrolls",
            Self::Wand | Self::Rod | Self::Staff | Self::SpellcastingFocus => "Arcane Implements",
            Self::Ring => "Rings",
            Self::AdventuringGear | Self::Other => "Adventuring Gear",
            Self::Treasure | Self::ArtObject | Self::Gemstone | Self::Coinage | Self::TradeGood => {
                "Treasure"
            }
            Self::ArtisansTools | Self::Tools | Self::Instrument | Self::GamingSet => "Tools",
            Self::Mount
            | Self::LandVehicle
            | Self::WaterVehicle
            | Self::AirVehicle
            | Self::TackAndHarness => "Mounts and Vehicles",
            Self::FoodAndDrink => "Food and Drink",
        }
    }

    #[must_use]
    pub fn is_weapon(self) -> bool {
        matches!(self, Self::MeleeWeapon | Self::RangedWeapon)
    }

    #[must_use]
    pub fn is_armor(self) -> bool {
        matches!(
            self,
            Self::LightArmor | Self::MediumArmor | Self::HeavyArmor | Self::Shield
        )
    }
}

/// Weapon property code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemProperty {
    Ammunition,
    BurstFire,
    Finesse,
    Heavy,
    Light,
    Loading,
    Reach,
    Reload,
    Special,
    Thrown,
    TwoHanded,
    Versatile,
}

impl ItemProperty {
    /// Parse a property code, ignoring any `|source` suffix.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let property = match crate::strip_source_suffix(code).trim() {
            "A" | "AF" => Self::Ammunition,
            "BF" => Self::BurstFire,
            "F" => Self::Finesse,
            "H" => Self::Heavy,
            "L" => Self::Light,
            "LD" => Self::Loading,
            "R" => Self::Reach,
            "RLD" => Self::Reload,
            "S" => Self::Special,
            "T" => Self::Thrown,
            "2H" => Self::TwoHanded,
            "V" => Self::Versatile,
            _ => return None,
        };
        Some(property)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ammunition => "Ammunition",
            Self::BurstFire => "Burst Fire",
            Self::Finesse => "Finesse",
            Self::Heavy => "Heavy",
            Self::Light => "Light",
            Self::Loading => "Loading",
            Self::Reach => "Reach",
            Self::Reload => "Reload",
            Self::Special => "Special",
            Self::Thrown => "Thrown",
            Self::TwoHanded => "Two-Handed",
            Self::Versatile => "Versatile",
        }
    }
}

/// Item rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rarity {
    /// Mundane item.
    None,
    Common,
    Uncommon,
    Rare,
    VeryRare,
    Legendary,
    Artifact,
    Varies,
    Unknown,
    UnknownMagic,
}

impl Rarity {
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let rarity = match code.trim().to_ascii_lowercase().as_str() {
            "none" => Self::None,
            "common" => Self::Common,
            "uncommon" => Self::Uncommon,
            "rare" => Self::Rare,
            "very rare" => Self::VeryRare,
            "legendary" => Self::Legendary,
            "artifact" => Self::Artifact,
            "varies" => Self::Varies,
            "unknown" => Self::Unknown,
            "unknown (magic)" => Self::UnknownMagic,
            _ => return None,
        };
        Some(rarity)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "Mundane",
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::VeryRare => "Very Rare",
            Self::Legendary => "Legendary",
            Self::Artifact => "Artifact",
            Self::Varies => "Varies",
            Self::Unknown => "Unknown",
            Self::UnknownMagic => "Unknown (Magic)",
        }
    }

    /// Whether the rarity marks a magic item.
    #[must_use]
    pub fn is_magic(self) -> bool {
        !matches!(self, Self::None | Self::Unknown)
    }
}
