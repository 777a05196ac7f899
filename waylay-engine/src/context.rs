//! Travel situation snapshot consumed by the encounter engine.

use serde::{Deserialize, Serialize};

/// Tile coordinates of the traveling character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Patrol tier of the road segment being traveled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoadDanger {
    Guarded,
    #[default]
    Moderate,
    Dangerous,
}

impl RoadDanger {
    /// Wire name used in prompts and serialized outcomes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guarded => "guarded",
            Self::Moderate => "moderate",
            Self::Dangerous => "dangerous",
        }
    }
}

/// Normalized time-of-day bucket used by the probability model and the
/// trigger-roll seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Dawn,
    #[default]
    Day,
    Dusk,
    Night,
}

impl TimeOfDay {
    /// Normalize the free-text field from the travel scheduler. Only the
    /// four literal bucket names are recognized; anything else falls back
    /// to `Day`. Matching is exact, no case folding.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw {
            "dawn" => Self::Dawn,
            "dusk" => Self::Dusk,
            "night" => Self::Night,
            _ => Self::Day,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dawn => "dawn",
            Self::Day => "day",
            Self::Dusk => "dusk",
            Self::Night => "night",
        }
    }
}

/// Immutable snapshot of one travel increment.
///
/// The travel scheduler supplies one fully populated context per
/// advancement unit. Completeness is a documented precondition on the
/// caller, not something the engine validates at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelEncounterContext {
    /// Campaign-wide seed string shared by every character in the campaign.
    pub campaign_seed: String,
    /// Identifier of the traveling character.
    pub character_id: String,
    /// Current tile position.
    pub position: Position,
    /// Free-text biome label ("Whispering Forest", "high desert", ...).
    pub biome: String,
    /// Free-text time of day, normalized internally via [`TimeOfDay`].
    pub time_of_day: String,
    /// Distance covered this increment, in tiles.
    pub distance: f64,
    /// Whether the character travels on a road.
    pub on_road: bool,
    /// Patrol tier of the current road segment.
    pub road_danger: RoadDanger,
}
