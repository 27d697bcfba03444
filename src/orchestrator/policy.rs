//! Escalation policy: what to do after each attempt.

use crate::error::FallbackReason;
use crate::types::{CleanedVerse, PromptVariant};

/// Hard ceiling on upstream calls per verse.
pub const MAX_UPSTREAM_CALLS: u32 = 2;

/// How one attempt turned out after sanitization.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptVerdict {
    /// Clean, non-refusing, at least one line (already cut to the line target).
    Accepted(CleanedVerse),
    /// The client returned an error.
    TransportFailure(String),
    /// The client succeeded with no text.
    EmptyResponse,
    /// Cleaned text matched the refusal bank.
    Refusal,
    /// Cleaned text had zero lines.
    Degenerate,
}

impl AttemptVerdict {
    /// The fallback reason this verdict maps to; `None` when accepted.
    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            Self::Accepted(_) => None,
            Self::TransportFailure(_) => Some(FallbackReason::TransportFailure),
            Self::EmptyResponse => Some(FallbackReason::EmptyResponse),
            Self::Refusal => Some(FallbackReason::RefusalDetected),
            Self::Degenerate => Some(FallbackReason::DegenerateOutput),
        }
    }
}

/// The orchestrator's state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Request(PromptVariant),
    Fallback(FallbackReason),
    Done(CleanedVerse),
}

/// Decides the next step from the current variant and its verdict.
///
/// Transport failures and empty responses never retry, which bounds latency
/// to the failing call. Refusals and degenerate output get one retry with
/// the simplified prompt when `retry_on_refusal` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscalationPolicy {
    pub retry_on_refusal: bool,
}

impl Default for EscalationPolicy {
    fn default() -> Self {
        Self {
            retry_on_refusal: true,
        }
    }
}

impl EscalationPolicy {
    /// Policy that falls back immediately on refusal.
    pub fn no_retry() -> Self {
        Self {
            retry_on_refusal: false,
        }
    }

    pub fn next(&self, variant: PromptVariant, verdict: AttemptVerdict) -> Step {
        match verdict {
            AttemptVerdict::Accepted(verse) => Step::Done(verse),
            AttemptVerdict::TransportFailure(_) => Step::Fallback(FallbackReason::TransportFailure),
            AttemptVerdict::EmptyResponse => Step::Fallback(FallbackReason::EmptyResponse),
            AttemptVerdict::Refusal => self.escalate(variant, FallbackReason::RefusalDetected),
            AttemptVerdict::Degenerate => self.escalate(variant, FallbackReason::DegenerateOutput),
        }
    }

    fn escalate(&self, variant: PromptVariant, reason: FallbackReason) -> Step {
        match variant {
            PromptVariant::Primary if self.retry_on_refusal => {
                Step::Request(PromptVariant::Simplified)
            }
            _ => Step::Fallback(reason),
        }
    }
}
