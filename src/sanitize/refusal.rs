//! Heuristic refusal detection.
//!
//! This is a regex bank, not a classifier. False positives and negatives are
//! expected; the orchestrator only uses it to decide whether to retry.

use std::sync::OnceLock;

use regex::RegexSet;

use crate::error::RoastError;

/// Refusal, apology and discomfort phrasing. Matched case-insensitively anywhere
/// in the text.
pub const DEFAULT_REFUSAL_PATTERNS: &[&str] = &[
    r"\bI (?:can['’]?t|cannot|won['’]t|will not) (?:participate|engage|help|assist|do|write|create|produce|generate|comply|fulfill|continue|roast)\b",
    r"\bI['’]m (?:not comfortable|unable to|not able to)\b",
    r"\bI don['’]t (?:feel comfortable|participate|engage)\b",
    r"\bnot comfortable\b",
    r"\buncomfortable\b",
    r"\bI['’]d (?:prefer|rather) not\b",
    r"\bI aim to (?:engage|be) respectful",
    r"\brespectful",
    r"\bas an AI\b",
    r"\bI['’]m an AI (?:assistant|model|language model)\b",
    r"\bagainst my (?:programming|guidelines|values|principles)\b",
    r"\binappropriate\b",
    r"\bI apologi[sz]e\b",
    r"\bI['’]m sorry\b",
];

/// A predicate deciding whether generated text declines the task.
pub trait RefusalDetector: Send + Sync {
    fn is_refusal(&self, text: &str) -> bool;
}

impl<F> RefusalDetector for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_refusal(&self, text: &str) -> bool {
        self(text)
    }
}

/// Regex-bank detector; extend the bank without touching orchestration.
#[derive(Debug, Clone)]
pub struct PatternRefusalDetector {
    patterns: Vec<String>,
    set: RegexSet,
}

impl PatternRefusalDetector {
    /// Build a detector from case-insensitive patterns.
    pub fn new<I, S>(patterns: I) -> Result<Self, RoastError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let set = regex::RegexSetBuilder::new(&patterns)
            .case_insensitive(true)
            .build()
            .map_err(|e| RoastError::Configuration(format!("invalid refusal pattern: {e}")))?;
        Ok(Self { patterns, set })
    }

    /// Add more patterns on top of the current bank.
    pub fn with_patterns<I, S>(self, extra: I) -> Result<Self, RoastError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut patterns = self.patterns;
        patterns.extend(extra.into_iter().map(Into::into));
        Self::new(patterns)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl Default for PatternRefusalDetector {
    fn default() -> Self {
        default_detector().clone()
    }
}

impl RefusalDetector for PatternRefusalDetector {
    fn is_refusal(&self, text: &str) -> bool {
        self.set.is_match(text)
    }
}

fn default_detector() -> &'static PatternRefusalDetector {
    static DETECTOR: OnceLock<PatternRefusalDetector> = OnceLock::new();
    DETECTOR.get_or_init(|| {
        PatternRefusalDetector::new(DEFAULT_REFUSAL_PATTERNS.iter().copied())
            .expect("default refusal patterns are valid")
    })
}

/// Check text against the default refusal bank.
pub fn detect_refusal(text: &str) -> bool {
    default_detector().is_refusal(text)
}
