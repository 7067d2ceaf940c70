use lw_tags::title_case;
use serde_json::Value;

use crate::convert::{self, proficiencies};
use crate::{FieldCatalog, FieldDefinition, MetaValue, Projection};

pub fn class() -> FieldCatalog {
    FieldCatalog::new("class")
        .field(FieldDefinition::new("name"))
        .field(FieldDefinition::new("hit_die").from_keys(&["hd"]).convert(hit_die))
        .field(
            FieldDefinition::new("saving_throws")
                .from_keys(&["proficiency"])
                .convert(convert::ability_names),
        )
        .field(
            FieldDefinition::new("armor")
                .from_keys(&["startingProficiencies.armor"])
                .convert(granted),
        )
        .field(
            FieldDefinition::new("weapons")
                .from_keys(&["startingProficiencies.weapons"])
                .convert(granted),
        )
        .field(
            FieldDefinition::new("tools")
                .from_keys(&["startingProficiencies.tools"])
                .convert(granted),
        )
        .field(
            FieldDefinition::new("skills")
                .from_keys(&["startingProficiencies.skills"])
                .convert(granted),
        )
        .field(
            FieldDefinition::new("skill_choices")
                .from_keys(&["startingProficiencies.skills"])
                .convert(choices),
        )
        .field(
            FieldDefinition::new("primary_ability")
                .from_keys(&["primaryAbility"])
                .convert(convert::ability_names),
        )
        .field(
            FieldDefinition::new("spellcasting_ability")
                .from_keys(&["spellcastingAbility"])
                .convert(single_ability),
        )
        .field(
            FieldDefinition::new("caster_progression")
                .from_keys(&["casterProgression"])
                .convert(caster_progression),
        )
        .field(FieldDefinition::new("subclass_title").from_keys(&["subclassTitle"]))
        .field(
            FieldDefinition::new("sources")
                .from_keys(&["source"])
                .convert(convert::sources),
        )
}

pub fn subclass() -> FieldCatalog {
    FieldCatalog::new("subclass")
        .field(FieldDefinition::new("name"))
        .field(FieldDefinition::new("class").from_keys(&["className"]))
        .field(FieldDefinition::new("short_name").from_keys(&["shortName"]))
        .field(
            FieldDefinition::new("spellcasting_ability")
                .from_keys(&["spellcastingAbility"])
                .convert(single_ability),
        )
        .field(
            FieldDefinition::new("caster_progression")
                .from_keys(&["casterProgression"])
                .convert(caster_progression)
                .optional(),
        )
        .field(
            FieldDefinition::new("sources")
                .from_keys(&["source"])
                .convert(convert::sources),
        )
}

pub(crate) fn granted(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    Some(MetaValue::List(proficiencies(raw).granted))
}

pub(crate) fn choices(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    Some(MetaValue::List(proficiencies(raw).choices))
}

fn hit_die(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let faces = raw.get("faces")?.as_i64()?;
    Some(MetaValue::Str(format!("d{faces}")))
}

fn single_ability(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    convert::ability_list(raw)
        .into_iter()
        .next()
        .map(MetaValue::Str)
}

fn caster_progression(raw: &Value, _: &Projection<'_>) -> Option<MetaValue> {
    let label = match raw.as_str()? {
        "full" => "Full".to_owned(),
        "1/2" => "Half".to_owned(),
        "artificer" => "Half (rounded up)".to_owned(),
        "1/3" => "Third".to_owned(),
        "pact" => "Pact Magic".to_owned(),
        other => title_case(other),
    };
    Some(MetaValue::Str(label))
}

#[cfg(test)]
mod tests {
    use lw_codes::Edition;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::ProjectionContext;

    #[test]
    fn test_class_fields() {
        let record = json!({
            "name": "Wizard",
            "source": "PHB",
            "hd": {"number": 1, "faces": 6},
            "proficiency": ["int", "wis"],
            "spellcastingAbility": "int",
            "casterProgression": "full",
            "startingProficiencies": {
                "weapons": ["{@item dagger|phb|daggers}", "{@item dart|phb|darts}"],
                "skills": [{"choose": {"from": ["arcana", "history"], "count": 2}}]
            },
            "subclassTitle": "Arcane Tradition"
        });
        let map = class()
            .default_schema(Edition::Classic)
            .project_record(&record, &ProjectionContext::default());
        assert_eq!(
            map.serialize(),
            "name: \"Wizard\"\n\
             hit_die: \"d6\"\n\
             saving_throws: [\"Intelligence\", \"Wisdom\"]\n\
             weapons: [\"Daggers\", \"Darts\"]\n\
             skills: [\"Choose 2\"]\n\
             skill_choices: [\"Arcana\", \"History\"]\n\
             spellcasting_ability: \"Intelligence\"\n\
             caster_progression: \"Full\"\n\
             subclass_title: \"Arcane Tradition\"\n\
             sources: [\"Player's Handbook (2014)\"]"
        );
    }

    #[test]
    fn test_subclass_fields() {
        let record = json!({
            "name": "School of Evocation",
            "shortName": "Evocation",
            "className": "Wizard",
            "source": "PHB"
        });
        let map = subclass()
            .default_schema(Edition::Classic)
            .project_record(&record, &ProjectionContext::default());
        assert_eq!(map.get_str("short_name"), Some("Evocation"));
        assert_eq!(map.get_str("class"), Some("Wizard"));
    }
}
