//! Encounter data model: categories, severity tiers, and the structured
//! narratives handed back to the travel scheduler.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::context::{RoadDanger, TimeOfDay};

/// Encounter categories the selector can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterType {
    MerchantCaravan,
    TravelingParty,
    RoadHazard,
    WeatherEvent,
    StrangeSound,
    AbandonedStructure,
    NpcEncounter,
}

impl EncounterType {
    /// Wire name embedded in prompts and serialized payloads.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::MerchantCaravan => "merchant_caravan",
            Self::TravelingParty => "traveling_party",
            Self::RoadHazard => "road_hazard",
            Self::WeatherEvent => "weather_event",
            Self::StrangeSound => "strange_sound",
            Self::AbandonedStructure => "abandoned_structure",
            Self::NpcEncounter => "npc_encounter",
        }
    }
}

/// Coarse danger classification derived from computed chance and road
/// danger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncounterSeverity {
    Trivial,
    Low,
    Moderate,
    High,
}

impl EncounterSeverity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trivial => "trivial",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

/// Narrative register the model is asked to pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Whimsical,
    Ominous,
    Mysterious,
    Urgent,
    Calm,
}

/// NPC motivations stay at two by convention, so two slots live inline.
pub type MotivationList = SmallVec<[String; 2]>;

/// Structured narrative produced exactly once per triggered evaluation,
/// by either the narrative model or the fallback builder. Immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedEncounter {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub encounter_type: EncounterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    pub description: String,
    #[serde(default)]
    pub npc_motivations: MotivationList,
    pub hook: String,
    pub tone: Tone,
}

/// Inputs handed to the narrative layer for one triggered evaluation.
/// Built once per trigger from the travel context and the selector's pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterPromptContext {
    #[serde(rename = "type")]
    pub encounter_type: EncounterType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    pub biome: String,
    pub time_of_day: TimeOfDay,
    pub distance_travelled: f64,
    pub danger_level: EncounterSeverity,
    pub road_danger: RoadDanger,
    pub on_road: bool,
}

/// Result of one travel-increment evaluation. Ephemeral: the travel
/// scheduler records it into its own event log; the engine keeps nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncounterOutcome {
    pub triggered: bool,
    pub encounter: Option<GeneratedEncounter>,
    /// Trigger roll in [1, 100].
    pub roll: u32,
    /// Rounded percentage the roll had to stay at or under.
    pub threshold: u32,
    /// Diagnostic line explaining the trigger decision.
    pub reason: String,
}
