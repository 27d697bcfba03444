//! Removal of intros and stage directions.

use std::sync::OnceLock;

use regex::RegexSet;

/// Shapes of whole lines that are never part of the verse proper.
///
/// Each pattern is matched against one trimmed line.
pub const PREAMBLE_PATTERNS: &[&str] = &[
    // "(mic feedback screech) ..."
    r"^\(.*?\).*$",
    r"(?i)^yo,?\s*(check|mic|one|two).*$",
    r"(?i)^.*in the (place|house|building)!.*$",
    r"(?i)^.*ready for this.*$",
    r"(?i)^here we go.*$",
    r"(?i)^let me.*$",
    r"(?i)^alright.*$",
    r"(?i)^listen up.*$",
    // "*drops mic*"
    r"^\*.*\*$",
    // "[Verse 1]"
    r"^\[.*\]$",
];

fn preamble_set() -> &'static RegexSet {
    static SET: OnceLock<RegexSet> = OnceLock::new();
    SET.get_or_init(|| RegexSet::new(PREAMBLE_PATTERNS).expect("preamble patterns are valid"))
}

/// Whether a single line is an intro or stage direction.
pub fn is_preamble_line(line: &str) -> bool {
    preamble_set().is_match(line.trim())
}

/// Delete every preamble line in full, then drop blank lines and trim.
pub fn strip_preambles(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !preamble_set().is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_stage_directions_and_intros() {
        let raw = "(mic feedback)\nYo check the mic!\n[Verse 1]\n*drops beat*\nReal bar here,";
        assert_eq!(strip_preambles(raw), "Real bar here,");
    }

    #[test]
    fn intro_matching_is_case_insensitive() {
        for line in [
            "HERE WE GO, round two",
            "let me tell you something",
            "Alright alright",
            "listen up, class",
            "Are you ready for this?",
            "GPT in the building! Make some noise",
            "yo, one two",
        ] {
            assert!(is_preamble_line(line), "{line}");
        }
    }

    #[test]
    fn keeps_lines_that_only_mention_keywords_mid_line() {
        assert!(!is_preamble_line("You said let me win, I said no,"));
        assert!(!is_preamble_line("Your *weak* model can't keep up,"));
    }

    #[test]
    fn deletes_whole_line_not_fragment() {
        let raw = "Here we go with a real bar\nsecond line";
        assert_eq!(strip_preambles(raw), "second line");
    }

    #[test]
    fn collapses_blank_lines() {
        assert_eq!(strip_preambles("\n\n  one  \n\n\ntwo\n"), "one\ntwo");
    }
}
