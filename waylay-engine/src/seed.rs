//! Seed-key composition for the deterministic encounter streams.
//!
//! Two keys exist on purpose. The trigger roll mixes in the normalized
//! time of day; the selection key does not, which decouples "does
//! something happen" from "what happens" across times of day. The
//! asymmetry is load-bearing: unifying the keys would silently shift the
//! encounter-type distribution.

use crate::context::{TimeOfDay, TravelEncounterContext};
use crate::numbers::js_number_string;

/// Key for the selection stream: campaign, character, position, distance.
#[must_use]
pub fn selection_key(ctx: &TravelEncounterContext) -> String {
    format!(
        "{}:{}:{}:{}:{}",
        ctx.campaign_seed,
        ctx.character_id,
        ctx.position.x,
        ctx.position.y,
        js_number_string(ctx.distance)
    )
}

/// Key for the trigger-roll stream: the selection key plus the normalized
/// time of day.
#[must_use]
pub fn trigger_key(ctx: &TravelEncounterContext, time_of_day: TimeOfDay) -> String {
    format!("{}:{}", selection_key(ctx), time_of_day.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Position, RoadDanger};

    fn sample_ctx() -> TravelEncounterContext {
        TravelEncounterContext {
            campaign_seed: "IRONWOOD".to_string(),
            character_id: "0a1b2c".to_string(),
            position: Position::new(14, -3),
            biome: "plains".to_string(),
            time_of_day: "night".to_string(),
            distance: 20.0,
            on_road: true,
            road_danger: RoadDanger::Moderate,
        }
    }

    #[test]
    fn selection_key_renders_integral_distance_without_decimal() {
        assert_eq!(selection_key(&sample_ctx()), "IRONWOOD:0a1b2c:14:-3:20");
    }

    #[test]
    fn trigger_key_appends_normalized_time_of_day() {
        let ctx = sample_ctx();
        let tod = TimeOfDay::normalize(&ctx.time_of_day);
        assert_eq!(trigger_key(&ctx, tod), "IRONWOOD:0a1b2c:14:-3:20:night");
    }

    #[test]
    fn fractional_distance_keeps_its_fraction() {
        let mut ctx = sample_ctx();
        ctx.distance = 7.5;
        assert!(selection_key(&ctx).ends_with(":7.5"));
    }
}
