//! Error classification shared by the client and the orchestrator.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The upstream call could not complete (network, non-success status, outage).
    Transport,
    Authentication,
    RateLimit,
    Timeout,
    Configuration,
    /// Caller-supplied data was malformed. Never absorbed by the orchestrator.
    InvalidInput,
    Unknown,
}

/// Why a verse had to be synthesized locally instead of generated upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FallbackReason {
    /// The generation call errored (network, status, timeout).
    TransportFailure,
    /// The primary call succeeded but returned no text at all.
    EmptyResponse,
    /// Both prompt variants produced refusal language.
    RefusalDetected,
    /// The last attempt sanitized down to zero lines.
    DegenerateOutput,
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    /// Absorb the failure and serve a fallback verse.
    UseFallback,
    CheckCredentials,
    CheckConfiguration,
    IncreaseTimeout,
    FixCallerInput,
}
