//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.inference.endpoint_base.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "inference.endpoint_base must not be empty".into(),
            ));
        }
        if self.inference.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "inference.timeout_ms must be > 0".into(),
            ));
        }
        if self.caption.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "caption.model must not be empty".into(),
            ));
        }
        if self.story.candidates.is_empty() {
            return Err(ConfigError::ValidationError(
                "story.candidates must list at least one model".into(),
            ));
        }
        for candidate in &self.story.candidates {
            if candidate.id.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "story.candidates entries must have a non-empty id".into(),
                ));
            }
            if candidate.temperature < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "story candidate {} has a negative temperature",
                    candidate.id
                )));
            }
            if candidate.max_length == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "story candidate {} must have max_length > 0",
                    candidate.id
                )));
            }
        }
        if self.story.attempts_per_model == 0 {
            return Err(ConfigError::ValidationError(
                "story.attempts_per_model must be > 0".into(),
            ));
        }
        if self.narration.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "narration.model must not be empty".into(),
            ));
        }
        Ok(())
    }
}
