//! Waylay Encounter Engine
//!
//! Deterministic travel-encounter decision core. Given a snapshot of a
//! traveling character's situation, the engine decides whether a random
//! encounter occurs during the current travel increment and, if so,
//! produces a structured narrative encounter via an external generative
//! text model, with a canned fallback when that model misbehaves.
//!
//! Trigger rolls and encounter selection are fully seeded: identical
//! campaign seed, character, position, distance, and time of day replay
//! identical rolls and thresholds, so any outcome can be reproduced for
//! debugging. The only non-deterministic corner is the fallback id, which
//! belongs to the degraded branch on purpose.
//!
//! The crate performs no scheduling and persists nothing; the travel
//! scheduler invokes [`EncounterEngine::evaluate_travel_encounter`] once
//! per advancement unit and records the returned outcome itself.

pub mod context;
pub mod encounter;
pub mod fallback;
#[cfg(feature = "http-model")]
pub mod http;
pub mod narrative;
pub mod numbers;
pub mod orchestrator;
pub mod probability;
pub mod rng;
pub mod seed;
pub mod selector;

// Re-export commonly used types
pub use context::{Position, RoadDanger, TimeOfDay, TravelEncounterContext};
pub use encounter::{
    EncounterOutcome, EncounterPromptContext, EncounterSeverity, EncounterType,
    GeneratedEncounter, MotivationList, Tone,
};
pub use fallback::build_fallback_encounter;
#[cfg(feature = "http-model")]
pub use http::{HttpModelConfig, HttpModelConnector, HttpNarrativeModel};
pub use narrative::{
    GENERATION_TIMEOUT, GenerationError, ModelConnector, ModelError, NarrativeGenerator,
    NarrativeModel, build_prompt,
};
pub use orchestrator::EncounterEngine;
pub use probability::{compute_base_chance, determine_danger_level};
pub use rng::SeededPrng;
pub use selector::{EncounterSelection, select_encounter_type};
