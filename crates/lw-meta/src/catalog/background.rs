use crate::catalog::class::{choices, granted};
use crate::convert;
use crate::{FieldCatalog, FieldDefinition};

pub fn background() -> FieldCatalog {
    FieldCatalog::new("background")
        .field(FieldDefinition::new("name"))
        .field(
            FieldDefinition::new("skills")
                .from_keys(&["skillProficiencies"])
                .convert(granted),
        )
        .field(
            FieldDefinition::new("skill_choices")
                .from_keys(&["skillProficiencies"])
                .convert(choices),
        )
        .field(
            FieldDefinition::new("tools")
                .from_keys(&["toolProficiencies"])
                .convert(granted),
        )
        .field(
            FieldDefinition::new("tool_choices")
                .from_keys(&["toolProficiencies"])
                .convert(choices),
        )
        .field(
            FieldDefinition::new("languages")
                .from_keys(&["languageProficiencies"])
                .convert(granted),
        )
        .field(FieldDefinition::new("feats").convert(granted))
        .field(
            FieldDefinition::new("sources")
                .from_keys(&["source"])
                .convert(convert::sources),
        )
}

#[cfg(test)]
mod tests {
    use lw_codes::Edition;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::ProjectionContext;

    #[test]
    fn test_background_fields() {
        let record = json!({
            "name": "Acolyte",
            "source": "XPHB",
            "skillProficiencies": [{"insight": true, "religion": true}],
            "toolProficiencies": [{"anyArtisansTool": 1}],
            "feats": [{"magic initiate; cleric|xphb": true}]
        });
        let map = background()
            .default_schema(Edition::One)
            .project_record(&record, &ProjectionContext::new(Edition::One));
        assert_eq!(
            map.serialize(),
            "name: \"Acolyte\"\n\
             skills: [\"Insight\", \"Religion\"]\n\
             tools: [\"Any 1 artisans tool\"]\n\
             feats: [\"Magic Initiate; Cleric\"]\n\
             sources: [\"Player's Handbook (2024)\"]"
        );
    }
}
