//! One side of a verse-generation request.

use serde::{Deserialize, Serialize};

use crate::error::RoastError;

/// A model persona taking part in a battle.
///
/// Constructed fresh per call from caller-supplied data and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    /// Display name, e.g. "GPT-4o".
    pub name: String,
    /// Provider label, e.g. "openai".
    pub provider_label: String,
    /// Upstream model identifier, e.g. "gpt-4o".
    pub model_identifier: String,
}

impl Actor {
    pub fn new(
        name: impl Into<String>,
        provider_label: impl Into<String>,
        model_identifier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            provider_label: provider_label.into(),
            model_identifier: model_identifier.into(),
        }
    }

    /// Check that every identity field is present and single-line.
    ///
    /// `role` names the actor in the error message ("speaker", "opponent").
    pub fn validate(&self, role: &str) -> Result<(), RoastError> {
        let fields = [
            ("name", &self.name),
            ("provider_label", &self.provider_label),
            ("model_identifier", &self.model_identifier),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(RoastError::invalid_input(format!(
                    "{role}.{field} must not be empty"
                )));
            }
            if value.contains(['\n', '\r']) {
                return Err(RoastError::invalid_input(format!(
                    "{role}.{field} must be a single line"
                )));
            }
        }
        Ok(())
    }
}
