//! Convenience re-exports for common use.

pub use crate::client::{GatewayClient, GenerationClient};
pub use crate::config::{RoastConfig, VerseSettings};
pub use crate::error::{FallbackReason, Result, RoastError};
pub use crate::orchestrator::{BattleVerses, EscalationPolicy, VerseOrchestrator};
pub use crate::sanitize::{detect_refusal, sanitize, RefusalDetector};
pub use crate::types::{
    Actor, CleanedVerse, GenerationRequest, GenerationResponse, PromptVariant, VerseResult,
};
