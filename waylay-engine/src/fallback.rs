//! Canned encounter used when the narrative model fails.
//!
//! The fallback id is intentionally non-deterministic: this is the
//! degraded, best-effort branch and it does not take part in replay
//! determinism the way trigger rolls and selections do.

use rand::Rng;
use smallvec::smallvec;

use crate::encounter::{EncounterPromptContext, EncounterType, GeneratedEncounter, Tone};
use crate::selector::{SUBTYPE_BANDIT_AMBUSH, SUBTYPE_DESERT_STORM, SUBTYPE_WILD_BEAST};

const FALLBACK_ID_SUFFIX_LEN: usize = 6;
const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const GENERIC_DESCRIPTION: &str =
    "Something unexpected interrupts the journey, demanding a choice before the road can continue.";
const FALLBACK_HOOK: &str =
    "Do you engage with them, keep your distance, or investigate further?";

/// Synthesize a canned structured encounter for the given prompt context.
/// Every field is populated; the engine relies on this never failing.
#[must_use]
pub fn build_fallback_encounter(ctx: &EncounterPromptContext) -> GeneratedEncounter {
    GeneratedEncounter {
        id: fallback_id(),
        name: fallback_name(ctx.encounter_type).to_string(),
        encounter_type: ctx.encounter_type,
        subtype: ctx.subtype.clone(),
        description: fallback_description(ctx).to_string(),
        npc_motivations: smallvec![
            "The travelers want news from the nearest settlement.".to_string(),
            "They offer to trade gossip for supplies.".to_string(),
        ],
        hook: FALLBACK_HOOK.to_string(),
        tone: Tone::Mysterious,
    }
}

fn fallback_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..FALLBACK_ID_SUFFIX_LEN)
        .map(|_| char::from(BASE36_ALPHABET[rng.gen_range(0..BASE36_ALPHABET.len())]))
        .collect();
    format!("fallback-{suffix}")
}

const fn fallback_name(encounter_type: EncounterType) -> &'static str {
    match encounter_type {
        EncounterType::MerchantCaravan => "Dust-Laden Caravan",
        EncounterType::TravelingParty => "Road-Weary Companions",
        EncounterType::RoadHazard => "Torn Up Road",
        EncounterType::WeatherEvent => "Gnawing Gale",
        EncounterType::StrangeSound => "Echoing Howls",
        EncounterType::AbandonedStructure => "Forgotten Waystation",
        EncounterType::NpcEncounter => "Unexpected Figure",
    }
}

fn fallback_description(ctx: &EncounterPromptContext) -> &'static str {
    match (ctx.encounter_type, ctx.subtype.as_deref()) {
        (EncounterType::WeatherEvent, Some(SUBTYPE_DESERT_STORM)) => {
            "A wall of sand roars across the dunes, blotting out the horizon and turning the sky the color of brass."
        }
        (EncounterType::NpcEncounter, Some(SUBTYPE_WILD_BEAST)) => {
            "The underbrush shivers as a massive stag steps onto the trail, antlers tangled with luminescent moss."
        }
        (EncounterType::RoadHazard, Some(SUBTYPE_BANDIT_AMBUSH)) => {
            "A toppled wagon blocks the road, and shadowy figures linger just beyond the torchlight."
        }
        _ => GENERIC_DESCRIPTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{RoadDanger, TimeOfDay};
    use crate::encounter::EncounterSeverity;

    fn ctx(encounter_type: EncounterType, subtype: Option<&str>) -> EncounterPromptContext {
        EncounterPromptContext {
            encounter_type,
            subtype: subtype.map(str::to_string),
            biome: "plains".to_string(),
            time_of_day: TimeOfDay::Day,
            distance_travelled: 10.0,
            danger_level: EncounterSeverity::Low,
            road_danger: RoadDanger::Moderate,
            on_road: true,
        }
    }

    #[test]
    fn id_carries_the_prefix_and_a_base36_suffix() {
        let encounter = build_fallback_encounter(&ctx(EncounterType::StrangeSound, None));
        let suffix = encounter.id.strip_prefix("fallback-").expect("prefix");
        assert_eq!(suffix.len(), FALLBACK_ID_SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| BASE36_ALPHABET.contains(&b)));
    }

    #[test]
    fn every_category_gets_a_named_fallback() {
        let all = [
            EncounterType::MerchantCaravan,
            EncounterType::TravelingParty,
            EncounterType::RoadHazard,
            EncounterType::WeatherEvent,
            EncounterType::StrangeSound,
            EncounterType::AbandonedStructure,
            EncounterType::NpcEncounter,
        ];
        for encounter_type in all {
            let encounter = build_fallback_encounter(&ctx(encounter_type, None));
            assert!(!encounter.name.is_empty());
            assert!(!encounter.description.is_empty());
            assert!(!encounter.hook.is_empty());
            assert_eq!(encounter.npc_motivations.len(), 2);
            assert_eq!(encounter.tone, Tone::Mysterious);
        }
    }

    #[test]
    fn special_cased_pairs_get_bespoke_descriptions() {
        let storm = build_fallback_encounter(&ctx(
            EncounterType::WeatherEvent,
            Some(SUBTYPE_DESERT_STORM),
        ));
        assert!(storm.description.contains("wall of sand"));

        let beast =
            build_fallback_encounter(&ctx(EncounterType::NpcEncounter, Some(SUBTYPE_WILD_BEAST)));
        assert!(beast.description.contains("stag"));

        let ambush =
            build_fallback_encounter(&ctx(EncounterType::RoadHazard, Some(SUBTYPE_BANDIT_AMBUSH)));
        assert!(ambush.description.contains("toppled wagon"));

        let generic = build_fallback_encounter(&ctx(EncounterType::WeatherEvent, Some("rockslide")));
        assert_eq!(generic.description, GENERIC_DESCRIPTION);
    }

    #[test]
    fn subtype_is_carried_through_unchanged() {
        let encounter =
            build_fallback_encounter(&ctx(EncounterType::RoadHazard, Some("washout")));
        assert_eq!(encounter.subtype.as_deref(), Some("washout"));
    }
}
