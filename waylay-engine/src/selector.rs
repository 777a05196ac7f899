//! Encounter category selection: fixed biome/road overrides first, then a
//! weighted draw over the remaining candidates.

use crate::context::{RoadDanger, TravelEncounterContext};
use crate::encounter::EncounterType;
use crate::rng::SeededPrng;
use crate::seed;

/// Subtype attached to the desert override.
pub const SUBTYPE_DESERT_STORM: &str = "desert_storm";
/// Subtype attached to the forest override.
pub const SUBTYPE_WILD_BEAST: &str = "wild_beast";
/// Subtype attached to the dangerous-road override.
pub const SUBTYPE_BANDIT_AMBUSH: &str = "bandit_ambush";
/// Road-hazard subtype in the weighted pool.
pub const SUBTYPE_WASHOUT: &str = "washout";
/// Weather subtype drawn in mountain biomes.
pub const SUBTYPE_ROCKSLIDE: &str = "rockslide";
/// Weather subtype drawn everywhere else.
pub const SUBTYPE_SUDDEN_STORM: &str = "sudden_storm";

/// Chosen category plus optional flavor subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterSelection {
    pub encounter_type: EncounterType,
    pub subtype: Option<&'static str>,
}

impl EncounterSelection {
    const fn new(encounter_type: EncounterType, subtype: Option<&'static str>) -> Self {
        Self {
            encounter_type,
            subtype,
        }
    }
}

struct Candidate {
    encounter_type: EncounterType,
    weight: u32,
    subtype: Option<&'static str>,
}

/// Pick the encounter category for a triggered evaluation.
///
/// Overrides are checked in fixed priority order before any random draw:
/// desert biomes always produce a desert storm, forests a wild beast, and
/// dangerous roads a bandit ambush. Everything else goes through a
/// weighted draw seeded from the selection key (which deliberately omits
/// the time of day, see [`crate::seed`]).
#[must_use]
pub fn select_encounter_type(ctx: &TravelEncounterContext) -> EncounterSelection {
    let biome = ctx.biome.to_lowercase();
    if biome.contains("desert") {
        return EncounterSelection::new(EncounterType::WeatherEvent, Some(SUBTYPE_DESERT_STORM));
    }
    if biome.contains("forest") {
        return EncounterSelection::new(EncounterType::NpcEncounter, Some(SUBTYPE_WILD_BEAST));
    }
    if matches!(ctx.road_danger, RoadDanger::Dangerous) {
        return EncounterSelection::new(EncounterType::RoadHazard, Some(SUBTYPE_BANDIT_AMBUSH));
    }

    let weather_subtype = if biome.contains("mountain") {
        SUBTYPE_ROCKSLIDE
    } else {
        SUBTYPE_SUDDEN_STORM
    };
    let candidates = [
        Candidate {
            encounter_type: EncounterType::MerchantCaravan,
            weight: if ctx.on_road { 24 } else { 10 },
            subtype: None,
        },
        Candidate {
            encounter_type: EncounterType::TravelingParty,
            weight: 16,
            subtype: None,
        },
        Candidate {
            encounter_type: EncounterType::RoadHazard,
            weight: if ctx.on_road { 18 } else { 12 },
            subtype: Some(SUBTYPE_WASHOUT),
        },
        Candidate {
            encounter_type: EncounterType::WeatherEvent,
            weight: 14,
            subtype: Some(weather_subtype),
        },
        Candidate {
            encounter_type: EncounterType::StrangeSound,
            weight: 12,
            subtype: None,
        },
        Candidate {
            encounter_type: EncounterType::AbandonedStructure,
            weight: if ctx.on_road { 8 } else { 18 },
            subtype: None,
        },
        Candidate {
            encounter_type: EncounterType::NpcEncounter,
            weight: 14,
            subtype: None,
        },
    ];

    let total_weight: u32 = candidates.iter().map(|candidate| candidate.weight).sum();
    let mut prng = SeededPrng::new(&seed::selection_key(ctx));
    let mut roll = prng.next() * f64::from(total_weight);

    for candidate in &candidates {
        if roll < f64::from(candidate.weight) {
            return EncounterSelection::new(candidate.encounter_type, candidate.subtype);
        }
        roll -= f64::from(candidate.weight);
    }

    // Only reachable through floating-point edge cases.
    EncounterSelection::new(EncounterType::StrangeSound, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Position;
    use std::collections::HashSet;

    fn ctx() -> TravelEncounterContext {
        TravelEncounterContext {
            campaign_seed: "camp".to_string(),
            character_id: "char".to_string(),
            position: Position::new(3, 7),
            biome: "plains".to_string(),
            time_of_day: "day".to_string(),
            distance: 20.0,
            on_road: true,
            road_danger: RoadDanger::Moderate,
        }
    }

    #[test]
    fn desert_override_beats_everything() {
        let mut c = ctx();
        c.biome = "High Desert".to_string();
        for danger in [
            RoadDanger::Guarded,
            RoadDanger::Moderate,
            RoadDanger::Dangerous,
        ] {
            c.road_danger = danger;
            let pick = select_encounter_type(&c);
            assert_eq!(pick.encounter_type, EncounterType::WeatherEvent);
            assert_eq!(pick.subtype, Some(SUBTYPE_DESERT_STORM));
        }
    }

    #[test]
    fn forest_override_beats_dangerous_roads() {
        let mut c = ctx();
        c.biome = "old forest".to_string();
        c.road_danger = RoadDanger::Dangerous;
        let pick = select_encounter_type(&c);
        assert_eq!(pick.encounter_type, EncounterType::NpcEncounter);
        assert_eq!(pick.subtype, Some(SUBTYPE_WILD_BEAST));
    }

    #[test]
    fn dangerous_road_forces_bandit_ambush_elsewhere() {
        let mut c = ctx();
        c.road_danger = RoadDanger::Dangerous;
        let pick = select_encounter_type(&c);
        assert_eq!(pick.encounter_type, EncounterType::RoadHazard);
        assert_eq!(pick.subtype, Some(SUBTYPE_BANDIT_AMBUSH));
    }

    #[test]
    fn selection_is_deterministic_for_identical_context() {
        let c = ctx();
        assert_eq!(select_encounter_type(&c), select_encounter_type(&c));
    }

    #[test]
    fn selection_ignores_time_of_day() {
        let mut day = ctx();
        day.time_of_day = "day".to_string();
        let mut night = ctx();
        night.time_of_day = "night".to_string();
        assert_eq!(select_encounter_type(&day), select_encounter_type(&night));
    }

    #[test]
    fn the_weighted_pool_covers_its_candidates() {
        let mut seen = HashSet::new();
        for i in 0..400 {
            let mut c = ctx();
            c.campaign_seed = format!("camp-{i}");
            seen.insert(select_encounter_type(&c).encounter_type);
        }
        // Every category carries double-digit-adjacent weight, so a few
        // hundred seeds should surface all seven.
        assert_eq!(seen.len(), 7, "pool did not cover candidates: {seen:?}");
    }

    #[test]
    fn mountain_biomes_draw_rockslides_instead_of_sudden_storms() {
        for i in 0..400 {
            let mut c = ctx();
            c.biome = "mountain pass".to_string();
            c.campaign_seed = format!("peak-{i}");
            let pick = select_encounter_type(&c);
            if pick.encounter_type == EncounterType::WeatherEvent {
                assert_eq!(pick.subtype, Some(SUBTYPE_ROCKSLIDE));
                return;
            }
        }
        panic!("no weather event drawn in 400 seeds");
    }
}
