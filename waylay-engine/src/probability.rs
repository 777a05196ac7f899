//! Multi-factor encounter probability model.

use crate::context::{RoadDanger, TimeOfDay, TravelEncounterContext};
use crate::encounter::EncounterSeverity;

/// Floor every computed chance is clamped to.
pub const MIN_CHANCE: f64 = 0.05;
/// Ceiling every computed chance is clamped to.
pub const MAX_CHANCE: f64 = 0.60;

const BASE_ON_ROAD: f64 = 0.15;
const BASE_OFF_ROAD: f64 = 0.25;
const DISTANCE_BONUS_STEP: f64 = 0.03;
const DISTANCE_BONUS_CAP: f64 = 0.20;
const DISTANCE_STEP_TILES: f64 = 10.0;
const NIGHT_MODIFIER: f64 = 0.07;
const DUSK_MODIFIER: f64 = 0.04;
const DANGEROUS_ROAD_MODIFIER: f64 = 0.08;
const GUARDED_ROAD_MODIFIER: f64 = -0.03;

const HIGH_CHANCE_CUTOFF: f64 = 0.35;
const MODERATE_CHANCE_CUTOFF: f64 = 0.28;
const LOW_CHANCE_CUTOFF: f64 = 0.18;

/// Encounter chance for one travel increment, clamped to
/// `[MIN_CHANCE, MAX_CHANCE]`.
#[must_use]
pub fn compute_base_chance(ctx: &TravelEncounterContext) -> f64 {
    let base = if ctx.on_road {
        BASE_ON_ROAD
    } else {
        BASE_OFF_ROAD
    };
    let distance_bonus =
        ((ctx.distance / DISTANCE_STEP_TILES).floor() * DISTANCE_BONUS_STEP).min(DISTANCE_BONUS_CAP);
    let time_modifier = match TimeOfDay::normalize(&ctx.time_of_day) {
        TimeOfDay::Night => NIGHT_MODIFIER,
        TimeOfDay::Dusk => DUSK_MODIFIER,
        TimeOfDay::Dawn | TimeOfDay::Day => 0.0,
    };
    let road_danger_modifier = match ctx.road_danger {
        RoadDanger::Dangerous => DANGEROUS_ROAD_MODIFIER,
        RoadDanger::Guarded => GUARDED_ROAD_MODIFIER,
        RoadDanger::Moderate => 0.0,
    };
    let chance = base + distance_bonus + time_modifier + biome_modifier(&ctx.biome)
        + road_danger_modifier;
    chance.clamp(MIN_CHANCE, MAX_CHANCE)
}

/// Case-insensitive substring modifiers for the free-text biome label.
fn biome_modifier(biome: &str) -> f64 {
    let normalized = biome.to_lowercase();
    if normalized.contains("forest") {
        0.05
    } else if normalized.contains("swamp") {
        0.06
    } else if normalized.contains("desert") {
        0.04
    } else if normalized.contains("mountain") {
        0.03
    } else {
        0.0
    }
}

/// Severity tier for a triggered encounter. Dangerous roads are always
/// `High` regardless of the computed chance.
#[must_use]
pub fn determine_danger_level(ctx: &TravelEncounterContext, chance: f64) -> EncounterSeverity {
    if matches!(ctx.road_danger, RoadDanger::Dangerous) || chance >= HIGH_CHANCE_CUTOFF {
        EncounterSeverity::High
    } else if chance >= MODERATE_CHANCE_CUTOFF {
        EncounterSeverity::Moderate
    } else if chance >= LOW_CHANCE_CUTOFF {
        EncounterSeverity::Low
    } else {
        EncounterSeverity::Trivial
    }
}
