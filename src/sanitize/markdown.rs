//! Markdown removal.

use std::sync::OnceLock;

use regex::Regex;

/// Replacement rules in application order. Triple emphasis must run before
/// bold and italic or stray asterisks are left behind.
const MARKDOWN_RULES: &[(&str, &str)] = &[
    (r"\*\*\*(.+?)\*\*\*", "$1"),
    (r"\*\*(.+?)\*\*", "$1"),
    (r"\*(.+?)\*", "$1"),
    (r"__(.+?)__", "$1"),
    // intraword underscores (snake_case) are not emphasis
    (r"(^|\W)_([^_\n]+?)_(\W|$)", "$1$2$3"),
    (r"~~(.+?)~~", "$1"),
    // fenced blocks are dropped, not unwrapped
    (r"(?s)```.*?```", ""),
    (r"`(.+?)`", "$1"),
    (r"\[(.+?)\]\(.+?\)", "$1"),
    (r"(?m)^[ \t]*#+[ \t]+", ""),
    // unpaired markers, including pairs split across lines
    (r"\*+", ""),
    (r"~~+", ""),
    (r"(?m)(^|\W)__+", "$1"),
    (r"(?m)__+(\W|$)", "$1"),
];

/// Upper bound on repeated passes; every effective pass shortens the text.
const MAX_PASSES: usize = 8;

fn markdown_rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        MARKDOWN_RULES
            .iter()
            .map(|(pattern, replacement)| {
                (
                    Regex::new(pattern).expect("markdown patterns are valid"),
                    *replacement,
                )
            })
            .collect()
    })
}

fn strip_once(text: &str) -> String {
    markdown_rules()
        .iter()
        .fold(text.to_string(), |acc, (regex, replacement)| {
            regex.replace_all(&acc, *replacement).into_owned()
        })
}

/// Remove emphasis, strikethrough, code, links and heading markers.
///
/// Passes repeat until the text stops changing so that nested or unbalanced
/// markers (`***a*`) do not survive into a second sanitization. Emphasis
/// markers without a partner on the same line are deleted.
pub fn strip_markdown(text: &str) -> String {
    let mut current = text.to_string();
    for _ in 0..MAX_PASSES {
        let next = strip_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}
