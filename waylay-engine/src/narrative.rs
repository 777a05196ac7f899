//! Narrative generation at the external text-model boundary.
//!
//! The model is an untrusted, fragile text source: it is invoked under a
//! hard timeout and its free-form reply is scraped for the first embedded
//! JSON object. Parsing stays behind this module so a stricter
//! structured-output mode can replace it without touching the
//! orchestrator.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::encounter::{EncounterPromptContext, GeneratedEncounter};
use crate::numbers::round_f64_to_i64;

/// Hard cap on a single model call. The losing branch of the race is
/// dropped, so a late reply can never overwrite an outcome that already
/// fell back.
pub const GENERATION_TIMEOUT: Duration = Duration::from_millis(8000);

/// Errors surfaced by a narrative model or its connector.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("network error: {0}")]
    Network(String),
    #[error("api error: {0}")]
    Api(String),
    #[error("empty response from model")]
    Empty,
}

/// The opaque "prompt in, completion out" text model.
///
/// Model selection, credentials, and rate limits are the integration
/// layer's concern; the engine only submits prompt strings.
#[async_trait]
pub trait NarrativeModel: Send + Sync {
    /// Submit a prompt and return the raw text completion.
    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Lazily establishes the shared model handle.
/// Platform-specific implementations should provide this.
#[async_trait]
pub trait ModelConnector: Send + Sync {
    /// Build (or fetch) the model handle. Called at most once per
    /// generator; see [`NarrativeGenerator`].
    async fn connect(&self) -> Result<Arc<dyn NarrativeModel>, ModelError>;
}

#[async_trait]
impl<T: ModelConnector + ?Sized> ModelConnector for Arc<T> {
    async fn connect(&self) -> Result<Arc<dyn NarrativeModel>, ModelError> {
        (**self).connect().await
    }
}

/// Failure taxonomy for one generation attempt. Every variant is
/// recovered identically by the orchestrator via the fallback path.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model connect failed: {0}")]
    Connect(#[source] ModelError),
    #[error("model call failed: {0}")]
    Model(#[source] ModelError),
    #[error("encounter generation timed out")]
    Timeout,
    #[error("no JSON object found in model response")]
    MissingJson,
    #[error("malformed encounter payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Builds prompts, invokes the model under [`GENERATION_TIMEOUT`], and
/// parses the reply into a [`GeneratedEncounter`].
pub struct NarrativeGenerator<C> {
    connector: C,
    handle: OnceCell<Arc<dyn NarrativeModel>>,
}

impl<C: ModelConnector> NarrativeGenerator<C> {
    #[must_use]
    pub const fn new(connector: C) -> Self {
        Self {
            connector,
            handle: OnceCell::const_new(),
        }
    }

    /// Memoized model handle. The cell holds the in-flight connect future,
    /// so concurrent first callers share a single initialization instead
    /// of racing their own.
    async fn model(&self) -> Result<&Arc<dyn NarrativeModel>, GenerationError> {
        self.handle
            .get_or_try_init(|| self.connector.connect())
            .await
            .map_err(GenerationError::Connect)
    }

    /// Generate a structured encounter for one triggered evaluation.
    ///
    /// # Errors
    ///
    /// Fails when the connect fails, the timeout wins the race, the reply
    /// carries no JSON-like substring, or parsing rejects the payload.
    pub async fn generate_encounter(
        &self,
        ctx: &EncounterPromptContext,
    ) -> Result<GeneratedEncounter, GenerationError> {
        let model = self.model().await?;
        let prompt = build_prompt(ctx);
        let text = tokio::time::timeout(GENERATION_TIMEOUT, model.complete(&prompt))
            .await
            .map_err(|_| GenerationError::Timeout)?
            .map_err(GenerationError::Model)?;
        let payload = extract_json_object(&text).ok_or(GenerationError::MissingJson)?;
        Ok(serde_json::from_str(payload)?)
    }
}

/// Greedy brace-to-brace scrape: first `{` through last `}`.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Deterministic prompt template for one triggered evaluation.
#[must_use]
pub fn build_prompt(ctx: &EncounterPromptContext) -> String {
    let type_name = ctx.encounter_type.wire_name();
    let subtype_line = ctx
        .subtype
        .as_deref()
        .map(|subtype| format!("- Subtype: {subtype}\n"))
        .unwrap_or_default();
    let subtype_field = ctx.subtype.as_deref().unwrap_or(type_name);
    let distance = round_f64_to_i64(ctx.distance_travelled);

    format!(
        r#"You are The Chronicler, generating a flavorful travel encounter for a tabletop RPG.

Encounter Inputs:
- Encounter Type: {type_name}
{subtype_line}- Biome: {biome}
- Time of Day: {time_of_day}
- Distance Travelled in session (tiles): {distance}
- Danger Level: {danger_level}
- Road Danger: {road_danger}
- On Road: {on_road}

Respond ONLY with a JSON object shaped exactly like this:
{{
  "id": "string (unique short identifier)",
  "name": "short evocative title",
  "type": "{type_name}",
  "subtype": "{subtype_field}",
  "description": "2 sentences of vivid description, include sensory details",
  "npcMotivations": ["short bullet-style motivation or rumor", "another"],
  "hook": "player-facing prompt or choice",
  "tone": "whimsical | ominous | mysterious | urgent | calm"
}}

Guidelines:
- Tie the encounter strongly to the biome and road danger level.
- If type is weather_event, describe weather hazards.
- If type is merchant_caravan or traveling_party, include NPC motivations.
- Keep language game-master friendly.
- Avoid combat directives; focus on story beats.
- 2 motivations maximum.
"#,
        biome = ctx.biome,
        time_of_day = ctx.time_of_day.as_str(),
        danger_level = ctx.danger_level.as_str(),
        road_danger = ctx.road_danger.as_str(),
        on_road = ctx.on_road,
    )
}
