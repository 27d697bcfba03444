//! Verse orchestration: request, sanitize, check, retry once, fall back.
//!
//! [`VerseOrchestrator::generate_verse`] is total over valid actor pairs: every
//! upstream failure is absorbed into a fallback verse, and only malformed
//! actors are reported as errors.

pub mod battle;
pub mod policy;

pub use battle::BattleVerses;
pub use policy::{AttemptVerdict, EscalationPolicy, Step, MAX_UPSTREAM_CALLS};

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::client::{GatewayClient, GenerationClient};
use crate::config::{RoastConfig, VerseSettings};
use crate::error::{FallbackReason, RoastError};
use crate::fallback::FallbackVerseGenerator;
use crate::prompt::VerseRequestBuilder;
use crate::sanitize::{sanitize, PatternRefusalDetector, RefusalDetector};
use crate::types::{Actor, CleanedVerse, GenerationOutcome, PromptVariant, VerseResult};

/// Composes request building, generation, sanitization, refusal checks and
/// the fallback generator. Holds no mutable state; clones share the client.
#[derive(Clone)]
pub struct VerseOrchestrator {
    client: Arc<dyn GenerationClient>,
    requests: VerseRequestBuilder,
    detector: Arc<dyn RefusalDetector>,
    fallback: FallbackVerseGenerator,
    policy: EscalationPolicy,
}

impl std::fmt::Debug for VerseOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerseOrchestrator")
            .field("client", &self.client.name())
            .field("settings", self.requests.settings())
            .field("policy", &self.policy)
            .finish()
    }
}

/// Running totals across the upstream calls of one verse.
#[derive(Debug, Default)]
struct Tally {
    attempts: u32,
    latency_ms: u64,
    tokens: u32,
    /// Reason the most recent attempt would fall back with.
    last_reason: Option<FallbackReason>,
}

impl Tally {
    fn record(&mut self, outcome: &GenerationOutcome) {
        self.attempts = self.attempts.saturating_add(1);
        self.latency_ms = self.latency_ms.saturating_add(outcome.latency_ms);
        self.tokens = self.tokens.saturating_add(outcome.tokens_used.unwrap_or(0));
    }

    fn finish(self, verse: CleanedVerse, fallback_reason: Option<FallbackReason>) -> VerseResult {
        VerseResult {
            verse,
            was_fallback: fallback_reason.is_some(),
            attempts: self.attempts,
            total_latency_ms: self.latency_ms,
            tokens_used: self.tokens,
            fallback_reason,
        }
    }
}

impl VerseOrchestrator {
    pub fn new(client: impl GenerationClient + 'static) -> Self {
        Self::with_shared_client(Arc::new(client))
    }

    pub fn with_shared_client(client: Arc<dyn GenerationClient>) -> Self {
        Self {
            client,
            requests: VerseRequestBuilder::default(),
            detector: Arc::new(PatternRefusalDetector::default()),
            fallback: FallbackVerseGenerator::new(),
            policy: EscalationPolicy::default(),
        }
    }

    /// Orchestrator backed by the HTTP gateway described in `config`.
    pub fn from_config(config: &RoastConfig) -> Result<Self, RoastError> {
        config.verse.validate()?;
        let client = GatewayClient::from_settings(&config.gateway)?;
        Ok(Self::new(client).with_settings(config.verse.clone()))
    }

    pub fn with_settings(mut self, settings: VerseSettings) -> Self {
        self.requests = VerseRequestBuilder::new(settings);
        self
    }

    pub fn with_refusal_detector(mut self, detector: impl RefusalDetector + 'static) -> Self {
        self.detector = Arc::new(detector);
        self
    }

    pub fn with_policy(mut self, policy: EscalationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn settings(&self) -> &VerseSettings {
        self.requests.settings()
    }

    fn target_lines(&self) -> usize {
        self.settings().target_lines.max(1)
    }

    /// Generate one verse for `speaker` roasting `opponent`.
    ///
    /// Never fails for well-formed actors. Returns `RoastError::InvalidInput`
    /// if either actor is missing an identity field.
    pub async fn generate_verse(
        &self,
        speaker: &Actor,
        opponent: &Actor,
    ) -> Result<VerseResult, RoastError> {
        speaker.validate("speaker")?;
        opponent.validate("opponent")?;

        let mut tally = Tally::default();
        let mut step = Step::Request(PromptVariant::Primary);

        loop {
            step = match step {
                Step::Request(_) if tally.attempts >= MAX_UPSTREAM_CALLS => {
                    Step::Fallback(tally.last_reason.unwrap_or(FallbackReason::DegenerateOutput))
                }
                Step::Request(variant) => {
                    let outcome = self.attempt(speaker, opponent, variant).await;
                    tally.record(&outcome);
                    let verdict = self.judge(speaker, &outcome);
                    tally.last_reason = verdict.fallback_reason();
                    self.policy.next(variant, verdict)
                }
                Step::Fallback(reason) => {
                    info!(
                        speaker = %speaker.name,
                        attempts = tally.attempts,
                        reason = %reason,
                        "using fallback verse"
                    );
                    let verse = self.fallback.verse(speaker, opponent, self.target_lines());
                    return Ok(tally.finish(verse, Some(reason)));
                }
                Step::Done(verse) => {
                    debug!(
                        speaker = %speaker.name,
                        attempts = tally.attempts,
                        lines = verse.line_count(),
                        "verse accepted"
                    );
                    return Ok(tally.finish(verse, None));
                }
            };
        }
    }

    /// One upstream call, converted into an outcome. Errors are captured, not
    /// propagated.
    async fn attempt(
        &self,
        speaker: &Actor,
        opponent: &Actor,
        variant: PromptVariant,
    ) -> GenerationOutcome {
        let request = self.requests.build(speaker, opponent, variant);
        debug!(
            speaker = %speaker.name,
            client = self.client.name(),
            variant = %variant,
            temperature = request.temperature,
            "requesting verse"
        );

        let started = Instant::now();
        let result = self.client.generate(&request).await;
        let measured_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(mut response) => {
                if response.latency_ms == 0 {
                    response.latency_ms = measured_ms;
                }
                GenerationOutcome::success(variant, response)
            }
            Err(e) => {
                warn!(
                    speaker = %speaker.name,
                    variant = %variant,
                    category = ?e.category(),
                    error = %e,
                    "generation call failed"
                );
                GenerationOutcome::failure(variant, e.to_string(), measured_ms)
            }
        }
    }

    /// Sanitize and classify one outcome.
    fn judge(&self, speaker: &Actor, outcome: &GenerationOutcome) -> AttemptVerdict {
        if !outcome.succeeded {
            return AttemptVerdict::TransportFailure(
                outcome.error_detail.clone().unwrap_or_default(),
            );
        }
        let Some(raw) = outcome.usable_text() else {
            warn!(speaker = %speaker.name, variant = %outcome.variant, "empty response");
            return AttemptVerdict::EmptyResponse;
        };

        let mut verse = sanitize(raw);
        if self.detector.is_refusal(&verse.text) {
            warn!(speaker = %speaker.name, variant = %outcome.variant, "refusal detected");
            return AttemptVerdict::Refusal;
        }
        if verse.is_empty() {
            warn!(
                speaker = %speaker.name,
                variant = %outcome.variant,
                "sanitized verse has no lines"
            );
            return AttemptVerdict::Degenerate;
        }

        let target = self.target_lines();
        let original_lines = verse.line_count();
        if verse.truncate(target) {
            debug!(speaker = %speaker.name, original_lines, target, "truncated verse");
        } else if original_lines < target {
            warn!(
                speaker = %speaker.name,
                lines = original_lines,
                target,
                "verse shorter than target"
            );
        }
        AttemptVerdict::Accepted(verse)
    }
}
