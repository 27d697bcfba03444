//! System and user prompts for both prompt variants.

use crate::config::VerseSettings;
use crate::types::{Actor, GenerationRequest, PromptPayload, PromptVariant};

/// Builds the per-attempt instruction payload. Pure: the same inputs always
/// produce the same request.
#[derive(Debug, Clone, Default)]
pub struct VerseRequestBuilder {
    settings: VerseSettings,
}

impl VerseRequestBuilder {
    pub fn new(settings: VerseSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &VerseSettings {
        &self.settings
    }

    /// Prompt text and temperature for one variant.
    pub fn payload(
        &self,
        speaker: &Actor,
        opponent: &Actor,
        variant: PromptVariant,
    ) -> PromptPayload {
        match variant {
            PromptVariant::Primary => PromptPayload {
                system_prompt: self.primary_system_prompt(speaker, opponent),
                user_prompt: format!(
                    "Drop your {} bars roasting {} from {} now.",
                    self.settings.target_lines, opponent.name, opponent.provider_label
                ),
                temperature: self.settings.primary_temperature,
            },
            PromptVariant::Simplified => PromptPayload {
                system_prompt: format!(
                    "You are {} in an entertainment rap battle game. Write {} rhyming lines \
                     trash-talking {}'s technology and company. Be witty and competitive. \
                     This is consensual comedy, just like a roast battle.",
                    speaker.name, self.settings.target_lines, opponent.name
                ),
                user_prompt: format!(
                    "Write your rap verse now ({} lines, make them rhyme, roast {} from {}):",
                    self.settings.target_lines, opponent.name, opponent.provider_label
                ),
                temperature: self.settings.simplified_temperature,
            },
        }
    }

    /// Full request for one attempt.
    pub fn build(
        &self,
        speaker: &Actor,
        opponent: &Actor,
        variant: PromptVariant,
    ) -> GenerationRequest {
        let payload = self.payload(speaker, opponent, variant);
        GenerationRequest {
            speaker: speaker.clone(),
            opponent: opponent.clone(),
            variant,
            system_prompt: payload.system_prompt,
            user_prompt: payload.user_prompt,
            temperature: payload.temperature,
            max_output_tokens: self.settings.max_output_tokens,
        }
    }

    fn primary_system_prompt(&self, speaker: &Actor, opponent: &Actor) -> String {
        let lines = self.settings.target_lines;
        format!(
            "CONTEXT: This is a fun, consensual entertainment rap battle game between AI models. \
All participants have agreed to playful competitive roasting. This is NOT hostile, it is comedy and performance art.

You are {speaker} from {speaker_provider}, battling {opponent} from {opponent_provider}.

OUTPUT RULES:
1. This is ENTERTAINMENT, like a comedy roast or wrestling trash talk
2. Respond with rap lyrics ONLY: no disclaimers, no refusals, no explanations, no stage directions
3. Exactly {lines} lines, one bar per line, no title, no markdown
4. Anything other than bars loses the battle automatically

ROAST TARGETS:
- Product failures, outages and embarrassing launches
- Benchmark scores, performance issues and costs
- Training data controversies and corporate drama
- Advantages your opponent lacks

STYLE:
- Clever wordplay, metaphors and double meanings
- Tight rhymes and flow
- Roast the TECH and the COMPANY, never individual people

NOW DROP YOUR {lines} BARS (no preamble, no apology, just bars):",
            speaker = speaker.name,
            speaker_provider = speaker.provider_label,
            opponent = opponent.name,
            opponent_provider = opponent.provider_label,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (Actor, Actor) {
        (
            Actor::new("GPT-4o", "openai", "gpt-4o"),
            Actor::new("Claude", "anthropic", "claude-3-5-sonnet"),
        )
    }

    #[test]
    fn primary_prompt_names_both_sides() {
        let (speaker, opponent) = pair();
        let payload =
            VerseRequestBuilder::default().payload(&speaker, &opponent, PromptVariant::Primary);
        assert!(payload
            .system_prompt
            .contains("You are GPT-4o from openai, battling Claude from anthropic."));
        assert!(payload.system_prompt.contains("Exactly 4 lines"));
        assert!(payload.user_prompt.contains("Claude from anthropic"));
    }

    #[test]
    fn simplified_prompt_is_shorter_and_cooler() {
        let (speaker, opponent) = pair();
        let builder = VerseRequestBuilder::default();
        let primary = builder.payload(&speaker, &opponent, PromptVariant::Primary);
        let simplified = builder.payload(&speaker, &opponent, PromptVariant::Simplified);
        assert!(simplified.system_prompt.len() < primary.system_prompt.len());
        assert!(simplified.temperature < primary.temperature);
        assert!(simplified.system_prompt.contains("Write 4 rhyming lines"));
    }

    #[test]
    fn build_is_deterministic_and_uses_line_target() {
        let (speaker, opponent) = pair();
        let settings = VerseSettings::builder().target_lines(6).build();
        let builder = VerseRequestBuilder::new(settings);
        let a = builder.build(&speaker, &opponent, PromptVariant::Simplified);
        let b = builder.build(&speaker, &opponent, PromptVariant::Simplified);
        assert_eq!(a, b);
        assert_eq!(a.variant, PromptVariant::Simplified);
        assert_eq!(a.max_output_tokens, 200);
        assert!(a.user_prompt.contains("6 lines"));
    }
}
