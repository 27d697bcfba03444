//! Deterministic cleanup of generated verse text.
//!
//! The pipeline is pure and idempotent: feeding a sanitized verse's text back
//! through [`sanitize`] yields the same [`CleanedVerse`].

pub mod markdown;
pub mod preamble;
pub mod refusal;

pub use markdown::strip_markdown;
pub use preamble::strip_preambles;
pub use refusal::{detect_refusal, PatternRefusalDetector, RefusalDetector};

use crate::types::CleanedVerse;

/// Punctuation that is rewritten to a comma at the end of a line.
const TERMINAL_PUNCTUATION: [char; 5] = ['!', '?', '.', ';', ':'];

/// Give every non-empty line a trailing comma.
///
/// Lines already ending in `,` keep it, lines ending in `! ? . ; :` have that
/// character replaced, everything else gets one appended. Trailing whitespace
/// is dropped from non-empty lines; blank lines pass through unchanged.
pub fn normalize_line_endings(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim_end();
            if trimmed.is_empty() {
                return line.to_string();
            }
            if trimmed.ends_with(',') {
                return trimmed.to_string();
            }
            match trimmed.strip_suffix(TERMINAL_PUNCTUATION) {
                Some(stem) => format!("{stem},"),
                None => format!("{trimmed},"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full cleanup: preambles, markdown, a second preamble sweep for intros that
/// were hidden behind markup, line-ending normalization, blank-line collapse.
///
/// Empty or whitespace-only input yields a verse with zero lines.
pub fn sanitize(text: &str) -> CleanedVerse {
    let text = strip_preambles(text);
    let text = strip_markdown(&text);
    let text = strip_preambles(&text);
    let text = normalize_line_endings(&text);
    CleanedVerse::from_lines(text.lines())
}
