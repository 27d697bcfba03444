//! Request and outcome types exchanged with a generation client.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::Actor;

/// Which system prompt shape to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PromptVariant {
    /// Full framing: identities, entertainment disclaimer, format rules, roast targets.
    Primary,
    /// Short, blunt instruction used after a refusal.
    Simplified,
}

/// The instruction payload for one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptPayload {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f64,
}

/// Everything a [`GenerationClient`](crate::client::GenerationClient) needs for one call.
///
/// Built once per attempt and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub speaker: Actor,
    pub opponent: Actor,
    pub variant: PromptVariant,
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

/// Successful response from a generation client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub text: String,
    pub tokens_used: u32,
    pub latency_ms: u64,
}

impl GenerationResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// What the orchestrator observed for one upstream call.
///
/// `raw_text` is never used directly; it always goes through sanitization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub variant: PromptVariant,
    pub raw_text: Option<String>,
    pub succeeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    pub latency_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
}

impl GenerationOutcome {
    pub fn success(variant: PromptVariant, response: GenerationResponse) -> Self {
        Self {
            variant,
            raw_text: Some(response.text),
            succeeded: true,
            error_detail: None,
            latency_ms: response.latency_ms,
            tokens_used: Some(response.tokens_used),
        }
    }

    pub fn failure(variant: PromptVariant, detail: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            variant,
            raw_text: None,
            succeeded: false,
            error_detail: Some(detail.into()),
            latency_ms,
            tokens_used: None,
        }
    }

    /// Raw text if the call succeeded with something other than whitespace.
    pub fn usable_text(&self) -> Option<&str> {
        self.raw_text
            .as_deref()
            .filter(|text| self.succeeded && !text.trim().is_empty())
    }
}
