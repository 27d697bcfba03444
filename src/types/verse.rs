//! Cleaned verses and the orchestrator's result.

use serde::{Deserialize, Serialize};

use crate::error::FallbackReason;

/// A sanitized verse: non-empty lines, no markdown, comma-terminated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedVerse {
    pub lines: Vec<String>,
    pub text: String,
}

impl CleanedVerse {
    /// Build from lines, dropping blank ones and trimming the rest.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        let text = lines.join("\n");
        Self { lines, text }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Keep only the first `max_lines` lines. Returns true if anything was dropped.
    pub fn truncate(&mut self, max_lines: usize) -> bool {
        if self.lines.len() <= max_lines {
            return false;
        }
        self.lines.truncate(max_lines);
        self.text = self.lines.join("\n");
        true
    }
}

impl std::fmt::Display for CleanedVerse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// The outcome of one `generate_verse` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseResult {
    pub verse: CleanedVerse,
    pub was_fallback: bool,
    /// Upstream calls actually made (0, 1 or 2).
    pub attempts: u32,
    /// Sum of observed latencies across real calls.
    pub total_latency_ms: u64,
    /// Sum of reported tokens across successful calls.
    pub tokens_used: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<FallbackReason>,
}
