//! Narration stage: story text to synthesized speech.
//!
//! A single shot against the text-to-speech endpoint. The success body is
//! the audio payload verbatim; the pipeline never decodes or validates the
//! encoding.

use crate::error::StageError;
use crate::inference::InferenceClient;
use crate::types::{AudioPayload, StoryResult};
use std::sync::Arc;

/// Turns story text into a speech audio payload.
pub struct Narrator {
    client: Arc<dyn InferenceClient>,
    endpoint: String,
}

impl Narrator {
    pub fn new(client: Arc<dyn InferenceClient>, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    /// Synthesize speech for `story`. No retry: narration flakiness surfaces
    /// immediately as a stage failure.
    pub async fn synthesize(&self, story: &StoryResult) -> Result<AudioPayload, StageError> {
        let payload = serde_json::json!({ "inputs": story.text });

        let body = self
            .client
            .invoke(&self.endpoint, &payload)
            .await
            .map_err(|e| StageError::NarrationFailed(e.to_string()))?;

        let bytes = body.into_bytes();
        tracing::info!("synthesized {} bytes of audio", bytes.len());
        Ok(AudioPayload { bytes })
    }
}
