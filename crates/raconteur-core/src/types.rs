//! Core data types for the Raconteur story pipeline.
//!
//! Data flows strictly through these types: image URL → caption → story →
//! audio. Each value is owned by the pipeline for the duration of one run.

use serde::{Deserialize, Serialize};

fn default_temperature() -> f32 {
    1.0
}

fn default_max_length() -> u32 {
    512
}

/// One text-generation backend tried during story generation.
///
/// Candidates are static configuration: the list is declared once, never
/// reordered at runtime, and earlier entries are preferred over later ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCandidate {
    /// Model identifier as the inference service knows it
    /// (e.g., "HuggingFaceH4/zephyr-7b-beta")
    pub id: String,

    /// Sampling temperature passed with each generation request
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum generated length passed with each generation request
    #[serde(default = "default_max_length")]
    pub max_length: u32,
}

impl ModelCandidate {
    /// Create a candidate with default generation parameters.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            temperature: default_temperature(),
            max_length: default_max_length(),
        }
    }
}

/// A generated story plus the model that produced it.
///
/// The model id is diagnostic only; the story text is what flows on to
/// narration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryResult {
    /// The story text (instructed to be 10-50 words, never enforced)
    pub text: String,

    /// Identifier of the candidate model that produced the text
    pub model_used: String,
}

/// Synthesized speech audio, exactly as the narration endpoint returned it.
///
/// The pipeline does not decode or validate the encoding; the bytes travel
/// verbatim to whatever persists them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    pub bytes: Vec<u8>,
}

impl AudioPayload {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
