//! Typed provider identifiers, alias handling and model-id inference.

use crate::types::Actor;

/// Upstream providers reachable through the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKey {
    OpenAi,
    Anthropic,
    Google,
    Groq,
    Xai,
    Together,
    Mistral,
}

impl ProviderKey {
    /// Canonical gateway slug.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::Groq => "groq",
            Self::Xai => "xai",
            Self::Together => "together",
            Self::Mistral => "mistral",
        }
    }

    /// Parse user-facing provider labels into a typed key.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "openai" | "chatgpt" => Some(Self::OpenAi),
            "anthropic" | "claude" => Some(Self::Anthropic),
            "google" | "gemini" => Some(Self::Google),
            "groq" => Some(Self::Groq),
            "xai" | "x.ai" | "grok" => Some(Self::Xai),
            "together" | "together-ai" | "togetherai" => Some(Self::Together),
            "mistral" => Some(Self::Mistral),
            _ => None,
        }
    }

    /// Guess the provider from a model identifier.
    ///
    /// `meta-llama` is checked before the generic `llama` rule so hosted
    /// Meta models route to Together rather than Groq. Unknown ids default
    /// to OpenAI.
    pub fn infer(model_identifier: &str) -> Self {
        let model = model_identifier.to_ascii_lowercase();
        if model.starts_with("gpt-") {
            Self::OpenAi
        } else if model.starts_with("claude-") {
            Self::Anthropic
        } else if model.starts_with("gemini-") {
            Self::Google
        } else if model.contains("meta-llama") {
            Self::Together
        } else if model.contains("llama") || model.contains("mixtral") {
            Self::Groq
        } else if model.starts_with("grok-") {
            Self::Xai
        } else {
            Self::OpenAi
        }
    }

    /// Provider label if recognized, otherwise inferred from the model id.
    pub fn resolve(actor: &Actor) -> Self {
        Self::parse(&actor.provider_label).unwrap_or_else(|| Self::infer(&actor.model_identifier))
    }

    /// `provider/model` identifier expected by the gateway.
    pub fn gateway_model(actor: &Actor) -> String {
        format!("{}/{}", Self::resolve(actor).as_str(), actor.model_identifier.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        for alias in ["xai", "Grok", "x.ai"] {
            assert_eq!(ProviderKey::parse(alias), Some(ProviderKey::Xai));
        }
        assert_eq!(ProviderKey::parse("Claude"), Some(ProviderKey::Anthropic));
        assert_eq!(ProviderKey::parse("acme"), None);
    }

    #[test]
    fn infers_from_model_prefixes() {
        assert_eq!(ProviderKey::infer("gpt-4o"), ProviderKey::OpenAi);
        assert_eq!(ProviderKey::infer("claude-3-5-sonnet"), ProviderKey::Anthropic);
        assert_eq!(ProviderKey::infer("gemini-1.5-pro"), ProviderKey::Google);
        assert_eq!(ProviderKey::infer("llama-3.1-70b-versatile"), ProviderKey::Groq);
        assert_eq!(ProviderKey::infer("mixtral-8x7b"), ProviderKey::Groq);
        assert_eq!(
            ProviderKey::infer("meta-llama/Llama-3-70b-chat-hf"),
            ProviderKey::Together
        );
        assert_eq!(ProviderKey::infer("grok-2"), ProviderKey::Xai);
        assert_eq!(ProviderKey::infer("mystery-model"), ProviderKey::OpenAi);
    }

    #[test]
    fn gateway_model_prefers_label_over_inference() {
        let actor = Actor::new("Grok", "xai", "grok-2");
        assert_eq!(ProviderKey::gateway_model(&actor), "xai/grok-2");

        let unlabeled = Actor::new("Claude", "Some Lab", "claude-3-haiku");
        assert_eq!(
            ProviderKey::gateway_model(&unlabeled),
            "anthropic/claude-3-haiku"
        );
    }
}
