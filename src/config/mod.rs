//! Configuration (layered: defaults < TOML file < environment).

use std::fmt;
use std::path::Path;
use std::time::Duration;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::RoastError;

/// Default OpenAI-compatible gateway endpoint.
pub const DEFAULT_GATEWAY_BASE_URL: &str = "https://ai-gateway.vercel.sh/v1";

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Knobs for verse generation.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct VerseSettings {
    /// Lines per verse. Longer output is truncated, shorter output is accepted.
    #[builder(default = 4)]
    pub target_lines: usize,
    #[builder(default = 1.0)]
    pub primary_temperature: f64,
    /// Lower than the primary temperature to favor compliance on retry.
    #[builder(default = 0.8)]
    pub simplified_temperature: f64,
    #[builder(default = 200)]
    pub max_output_tokens: u32,
}

impl Default for VerseSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl VerseSettings {
    pub fn validate(&self) -> Result<(), RoastError> {
        if self.target_lines == 0 {
            return Err(RoastError::Configuration(
                "target_lines must be at least 1".into(),
            ));
        }
        if self.max_output_tokens == 0 {
            return Err(RoastError::Configuration(
                "max_output_tokens must be at least 1".into(),
            ));
        }
        for (name, value) in [
            ("primary_temperature", self.primary_temperature),
            ("simplified_temperature", self.simplified_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                return Err(RoastError::Configuration(format!(
                    "{name} must be within 0.0..=2.0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Connection settings for the HTTP gateway client.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub request_timeout_ms: u64,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_GATEWAY_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl fmt::Debug for GatewaySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewaySettings")
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .field("base_url", &self.base_url)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .finish()
    }
}

impl GatewaySettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoastConfig {
    pub verse: VerseSettings,
    pub gateway: GatewaySettings,
}

impl RoastConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, RoastError> {
        let config: Self = toml::from_str(source)
            .map_err(|e| RoastError::Configuration(format!("invalid config file: {e}")))?;
        config.verse.validate()?;
        Ok(config)
    }

    /// Load a TOML file, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RoastError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)?.apply_env()
    }

    /// Defaults plus environment overrides (loads `.env` if present).
    pub fn from_env() -> Result<Self, RoastError> {
        Self::default().apply_env()
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(self) -> Result<Self, RoastError> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup.
    ///
    /// The gateway token comes from `VERCEL_OIDC_TOKEN`, falling back to
    /// `AI_GATEWAY_API_KEY`.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, RoastError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("VERCEL_OIDC_TOKEN").or_else(|| lookup("AI_GATEWAY_API_KEY")) {
            self.gateway.api_key = Some(token);
        }
        if let Some(url) = lookup("AI_GATEWAY_BASE_URL") {
            self.gateway.base_url = url;
        }
        if let Some(raw) = lookup("ROASTLINE_TARGET_LINES") {
            self.verse.target_lines = parse_env("ROASTLINE_TARGET_LINES", &raw)?;
        }
        if let Some(raw) = lookup("ROASTLINE_REQUEST_TIMEOUT_MS") {
            self.gateway.request_timeout_ms = parse_env("ROASTLINE_REQUEST_TIMEOUT_MS", &raw)?;
        }
        self.verse.validate()?;
        Ok(self)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, RoastError> {
    raw.trim()
        .parse()
        .map_err(|_| RoastError::Configuration(format!("{key} has invalid value '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = RoastConfig::default();
        assert_eq!(config.verse.target_lines, 4);
        assert_eq!(config.verse.max_output_tokens, 200);
        assert!(config.verse.simplified_temperature < config.verse.primary_temperature);
        assert_eq!(config.gateway.base_url, DEFAULT_GATEWAY_BASE_URL);
    }

    #[test]
    fn oidc_token_wins_over_api_key() {
        let config = RoastConfig::default()
            .apply_env_with(lookup(&[
                ("VERCEL_OIDC_TOKEN", "oidc"),
                ("AI_GATEWAY_API_KEY", "key"),
            ]))
            .unwrap();
        assert_eq!(config.gateway.api_key.as_deref(), Some("oidc"));
    }

    #[test]
    fn api_key_used_without_oidc() {
        let config = RoastConfig::default()
            .apply_env_with(lookup(&[("AI_GATEWAY_API_KEY", "key")]))
            .unwrap();
        assert_eq!(config.gateway.api_key.as_deref(), Some("key"));
    }

    #[test]
    fn numeric_overrides_are_parsed() {
        let config = RoastConfig::default()
            .apply_env_with(lookup(&[
                ("ROASTLINE_TARGET_LINES", " 6 "),
                ("ROASTLINE_REQUEST_TIMEOUT_MS", "1500"),
            ]))
            .unwrap();
        assert_eq!(config.verse.target_lines, 6);
        assert_eq!(config.gateway.request_timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn bad_numeric_override_is_configuration_error() {
        let err = RoastConfig::default()
            .apply_env_with(lookup(&[("ROASTLINE_TARGET_LINES", "four")]))
            .unwrap_err();
        assert!(matches!(
            err,
            RoastError::Configuration(msg) if msg.contains("ROASTLINE_TARGET_LINES")
        ));
    }

    #[test]
    fn zero_target_lines_rejected() {
        let err = RoastConfig::default()
            .apply_env_with(lookup(&[("ROASTLINE_TARGET_LINES", "0")]))
            .unwrap_err();
        assert!(matches!(err, RoastError::Configuration(_)));
    }

    #[test]
    fn debug_masks_api_key() {
        let mut config = RoastConfig::default();
        config.gateway.api_key = Some("secret-token".into());
        assert!(!format!("{config:?}").contains("secret-token"));
    }
}
