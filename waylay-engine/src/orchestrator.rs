//! Evaluation pipeline gluing probability, selection, generation, and the
//! fallback together behind one infallible entry point.

use crate::context::{TimeOfDay, TravelEncounterContext};
use crate::encounter::{EncounterOutcome, EncounterPromptContext};
use crate::fallback::build_fallback_encounter;
use crate::narrative::{ModelConnector, NarrativeGenerator};
use crate::probability::{compute_base_chance, determine_danger_level};
use crate::rng::SeededPrng;
use crate::selector::select_encounter_type;
use crate::{numbers, seed};

/// Travel-encounter decision engine.
///
/// One engine instance is meant to live for the process and be shared by
/// the travel scheduler; the narrative model handle inside it is
/// initialized at most once across all evaluations.
pub struct EncounterEngine<C> {
    generator: NarrativeGenerator<C>,
}

impl<C: ModelConnector> EncounterEngine<C> {
    /// Create an engine around the given model connector.
    #[must_use]
    pub const fn new(connector: C) -> Self {
        Self {
            generator: NarrativeGenerator::new(connector),
        }
    }

    /// Evaluate one travel increment.
    ///
    /// Never fails: model trouble of any kind degrades to the canned
    /// fallback encounter, logged but invisible in the outcome shape. The
    /// roll and threshold are reproducible for identical campaign seed,
    /// character, position, distance, and time of day.
    pub async fn evaluate_travel_encounter(
        &self,
        ctx: &TravelEncounterContext,
    ) -> EncounterOutcome {
        let chance = compute_base_chance(ctx);
        let danger_level = determine_danger_level(ctx, chance);
        let time_of_day = TimeOfDay::normalize(&ctx.time_of_day);

        let mut prng = SeededPrng::new(&seed::trigger_key(ctx, time_of_day));
        let roll = prng.roll_percent();
        let threshold = numbers::unit_to_percent(chance);

        if roll > threshold {
            return EncounterOutcome {
                triggered: false,
                encounter: None,
                roll,
                threshold,
                reason: format!("Roll {roll} exceeded threshold {threshold}"),
            };
        }

        let selection = select_encounter_type(ctx);
        let prompt_ctx = EncounterPromptContext {
            encounter_type: selection.encounter_type,
            subtype: selection.subtype.map(str::to_string),
            biome: ctx.biome.clone(),
            time_of_day,
            distance_travelled: ctx.distance,
            danger_level,
            road_danger: ctx.road_danger,
            on_road: ctx.on_road,
        };

        let encounter = match self.generator.generate_encounter(&prompt_ctx).await {
            Ok(encounter) => encounter,
            Err(err) => {
                log::warn!(
                    "narrative generation failed for {}: {err}; using fallback",
                    selection.encounter_type.wire_name()
                );
                build_fallback_encounter(&prompt_ctx)
            }
        };

        EncounterOutcome {
            triggered: true,
            encounter: Some(encounter),
            roll,
            threshold,
            reason: format!("Roll {roll} <= {threshold}"),
        }
    }
}
