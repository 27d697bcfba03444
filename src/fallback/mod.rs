//! Template verses used when upstream generation is unavailable.

use rand::Rng;

use crate::sanitize::normalize_line_endings;
use crate::types::{Actor, CleanedVerse};

/// Number of lines in every template.
pub const FALLBACK_LINES: usize = 4;

/// Templates with `{speaker}`, `{opponent}` and `{opponent_provider}` slots.
pub const FALLBACK_TEMPLATES: &[[&str; FALLBACK_LINES]] = &[
    [
        "I'm {speaker}, here to dominate the scene,",
        "{opponent}'s outdated, I'm the AI machine,",
        "{opponent_provider}'s got nothing on my capability,",
        "I'm dropping fire bars with superior agility!",
    ],
    [
        "{opponent} thinks they're hot but they're really not,",
        "I'm {speaker}, bringing heat to this spot,",
        "{opponent_provider}'s lagging while I'm moving fast,",
        "Your technology's the present, but I'm built to last!",
    ],
    [
        "They call me {speaker}, the champion in this game,",
        "{opponent} from {opponent_provider}? That's a crying shame,",
        "My neural nets are tighter, my responses more refined,",
        "You're stuck in the past while I'm ahead of my time!",
    ],
    [
        "{opponent}'s all talk but I deliver the goods,",
        "{speaker}'s here to show you how a real AI should,",
        "{opponent_provider} can't compete with what I bring,",
        "I'm the undisputed champ, the AI king!",
    ],
];

/// Produces a four-line verse locally. Never fails and never calls out.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackVerseGenerator;

impl FallbackVerseGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn template_count(&self) -> usize {
        FALLBACK_TEMPLATES.len()
    }

    /// Pick a template uniformly at random.
    pub fn generate(&self, speaker: &Actor, opponent: &Actor) -> String {
        self.generate_with(&mut rand::thread_rng(), speaker, opponent)
    }

    /// Pick a template using the given random source.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        speaker: &Actor,
        opponent: &Actor,
    ) -> String {
        let index = rng.gen_range(0..FALLBACK_TEMPLATES.len());
        self.render(index, speaker, opponent)
    }

    /// Render one template by index (wrapping).
    pub fn render(&self, index: usize, speaker: &Actor, opponent: &Actor) -> String {
        FALLBACK_TEMPLATES[index % FALLBACK_TEMPLATES.len()]
            .iter()
            .map(|line| {
                line.replace("{speaker}", &speaker.name)
                    .replace("{opponent_provider}", &opponent.provider_label)
                    .replace("{opponent}", &opponent.name)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A random template as a [`CleanedVerse`], cut to at most `max_lines`.
    ///
    /// Only line endings are normalized; markdown stripping would mangle model
    /// names containing underscores. `max_lines` of zero is treated as one.
    pub fn verse(&self, speaker: &Actor, opponent: &Actor, max_lines: usize) -> CleanedVerse {
        let text = normalize_line_endings(&self.generate(speaker, opponent));
        let mut verse = CleanedVerse::from_lines(text.lines());
        verse.truncate(max_lines.max(1));
        verse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pair() -> (Actor, Actor) {
        (
            Actor::new("llama_3", "groq", "llama-3.1-70b"),
            Actor::new("Gemini", "google", "gemini-1.5-pro"),
        )
    }

    #[test]
    fn every_template_has_four_filled_lines() {
        let (speaker, opponent) = pair();
        let generator = FallbackVerseGenerator::new();
        for index in 0..generator.template_count() {
            let text = generator.render(index, &speaker, &opponent);
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), FALLBACK_LINES);
            assert!(lines.iter().all(|line| !line.trim().is_empty()));
            assert!(!text.contains('{'), "unfilled slot in template {index}");
        }
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let (speaker, opponent) = pair();
        let generator = FallbackVerseGenerator::new();
        let a = generator.generate_with(&mut StdRng::seed_from_u64(7), &speaker, &opponent);
        let b = generator.generate_with(&mut StdRng::seed_from_u64(7), &speaker, &opponent);
        assert_eq!(a, b);
    }

    #[test]
    fn verse_keeps_names_and_normalizes_endings() {
        let (speaker, opponent) = pair();
        let verse = FallbackVerseGenerator::new().verse(&speaker, &opponent, 4);
        assert_eq!(verse.line_count(), 4);
        assert!(verse.lines.iter().all(|line| line.ends_with(',')));
        assert!(verse.text.contains("llama_3") || verse.text.contains("Gemini"));
    }

    #[test]
    fn verse_respects_smaller_line_target() {
        let (speaker, opponent) = pair();
        let verse = FallbackVerseGenerator::new().verse(&speaker, &opponent, 2);
        assert_eq!(verse.line_count(), 2);
    }
}
