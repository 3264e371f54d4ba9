//! Sub-configuration structs with defaults for every field.

use crate::types::ModelCandidate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Remote inference service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Base URL that model identifiers are appended to
    pub endpoint_base: String,

    /// Bearer token, usually a `${VAR}` reference resolved at client
    /// construction so the secret never lives in the file
    pub api_token: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint_base: "https://api-inference.huggingface.co/models".to_string(),
            api_token: "${HUGGINGFACEHUB_API_TOKEN}".to_string(),
            timeout_ms: 60_000,
        }
    }
}

impl InferenceConfig {
    /// Full endpoint URL for a model identifier.
    pub fn model_endpoint(&self, model: &str) -> String {
        format!("{}/{}", self.endpoint_base.trim_end_matches('/'), model)
    }
}

/// Image captioning settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    /// Captioning model identifier
    pub model: String,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            model: "Salesforce/blip-image-captioning-large".to_string(),
        }
    }
}

/// Story generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// Candidate models, tried in declaration order. The first entry should
    /// be the lightest model; later entries are fallbacks.
    pub candidates: Vec<ModelCandidate>,

    /// Attempts per candidate before falling back to the next one
    pub attempts_per_model: u32,

    /// Base backoff delay in milliseconds (doubles per attempt)
    pub retry_delay_ms: u64,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            candidates: vec![
                ModelCandidate::new("HuggingFaceH4/zephyr-7b-beta"),
                ModelCandidate::new("deepseek-ai/DeepSeek-R1"),
                ModelCandidate::new("deepseek-ai/DeepSeek-R1-Distill-Qwen-1.5B"),
            ],
            attempts_per_model: 3,
            retry_delay_ms: 1000,
        }
    }
}

/// Speech synthesis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationConfig {
    /// Text-to-speech model identifier
    pub model: String,

    /// Where the synthesized audio lands (FLAC as served by the endpoint)
    pub audio_path: PathBuf,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            model: "espnet/kan-bayashi_ljspeech_vits".to_string(),
            audio_path: PathBuf::from("story.flac"),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level ("error", "warn", "info", "debug", "trace")
    pub level: String,

    /// Output format ("pretty" or "json")
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
