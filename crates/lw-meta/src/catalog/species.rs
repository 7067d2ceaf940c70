use lw_codes::{Ability, Edition};
use serde_json::Value;

use crate::catalog::class::granted;
use crate::convert;
use crate::{FieldCatalog, FieldDefinition, MetaValue, Projection};

pub fn species() -> FieldCatalog {
    let mut catalog = FieldCatalog::new("species")
        .field(FieldDefinition::new("name"))
        .field(
            FieldDefinition::new("size")
                .convert(|raw, _| convert::size_name(raw).map(MetaValue::Str)),
        )
        .field(
            FieldDefinition::new("speed")
                .convert(|raw, _| convert::speed_summary(raw).map(MetaValue::Str)),
        )
        .field(FieldDefinition::new("darkvision").convert(convert::integer));
    for ability in Ability::ALL {
        catalog = catalog.field(
            FieldDefinition::new(&format!("ability_{}", ability.code()))
                .from_keys(&["ability"])
                .convert(move |raw, _| ability_bonus(raw, ability))
                .only(Edition::Classic),
        );
    }
    catalog
        .field(
            FieldDefinition::new("ability_choices")
                .from_keys(&["ability"])
                .convert(ability_choices)
                .only(Edition::Classic),
        )
        .field(
            FieldDefinition::new("languages")
                .from_keys(&["languageProficiencies"])
                .convert(granted),
        )
        .field(
            FieldDefinition::new("creature_types")
                .from_keys(&["creatureTypes"])
                .convert(convert::title_list)
                .only(Edition::One),
        )
        .field(
            FieldDefinition::new("resistances")
                .from_keys(&["resist"])
                .convert(convert::title_list),
        )
        .field(
            FieldDefinition::new("sources")
                .from_keys(&["source"])
                .convert(convert::sources),
        )
}

/// Fixed bonus for one ability, omitted when zero.
fn ability_bonus(raw: &Value, ability: Ability) -> Option<MetaValue> {
    let bonus: i64 = raw
        .as_array()?
        .iter()
        .filter_map(|set| set.get(ability.code())?.as_i64())
        .fold(0, i64::saturating_add);
    (bonus != 0).then_some(MetaValue::Int(bonus))
}

/// Ability names offered by `{"choose": {"from": [...]}}` entries.
fn ability_choices(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let mut names: Vec<String> = Vec::new();
    for set in raw.as_array()? {
        let Some(from) = set.get("choose").and_then(|c| c.get("from")) else {
            continue;
        };
        for name in convert::ability_list(from) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    Some(MetaValue::List(names))
}
