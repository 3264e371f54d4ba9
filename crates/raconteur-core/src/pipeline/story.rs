//! Story generation stage: ordered model fallback with bounded retry.
//!
//! Hosted inference endpoints, particularly shared free tiers, fail and
//! rate-limit routinely. One model's transient failure should not abort the
//! whole run when another model might answer, so this stage walks an ordered
//! candidate list, giving each model a bounded number of attempts with
//! exponential backoff, and returns the first usable story.

use super::retry::{backoff_delay, Sleeper, TokioSleeper};
use crate::config::StoryConfig;
use crate::error::{ClientError, StageError};
use crate::inference::InferenceClient;
use crate::types::{ModelCandidate, StoryResult};
use serde::Deserialize;
use std::sync::Arc;

/// Instruction template the caption is substituted into.
const STORY_PROMPT: &str = "You are a story teller. \
Generate a very short story based on the simple narrative below; \
be creative, and keep the story between 10 and 50 words.\n\
CONTEXT: {scenario}\n\
STORY:";

/// Expected shape of a generation response.
#[derive(Deserialize)]
struct GeneratedRow {
    generated_text: Option<String>,
}

/// Turns a caption into a short story via candidate-model fallback.
pub struct StoryGenerator {
    client: Arc<dyn InferenceClient>,
    endpoint_base: String,
    candidates: Vec<ModelCandidate>,
    attempts_per_model: u32,
    retry_delay_ms: u64,
    sleeper: Box<dyn Sleeper>,
}

impl StoryGenerator {
    pub fn new(client: Arc<dyn InferenceClient>, endpoint_base: &str, config: &StoryConfig) -> Self {
        Self {
            client,
            endpoint_base: endpoint_base.to_string(),
            candidates: config.candidates.clone(),
            attempts_per_model: config.attempts_per_model,
            retry_delay_ms: config.retry_delay_ms,
            sleeper: Box::new(TokioSleeper),
        }
    }

    /// Replace the backoff sleeper (tests swap in a recording stand-in).
    pub fn with_sleeper(mut self, sleeper: Box<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Generate a story from `caption`.
    ///
    /// Candidates are tried strictly in declaration order; the first
    /// non-empty post-processed result wins and no further attempts are
    /// made. Worst case, every candidate is tried `attempts_per_model`
    /// times before the stage gives up for good.
    pub async fn generate(&self, caption: &str) -> Result<StoryResult, StageError> {
        let prompt = build_prompt(caption);
        let mut last_error = String::new();

        for candidate in &self.candidates {
            let endpoint = format!(
                "{}/{}",
                self.endpoint_base.trim_end_matches('/'),
                candidate.id
            );

            for attempt in 0..self.attempts_per_model {
                match self.attempt(&endpoint, candidate, &prompt).await {
                    Ok(text) => {
                        tracing::info!(
                            "story generated by {} on attempt {}",
                            candidate.id,
                            attempt + 1
                        );
                        return Ok(StoryResult {
                            text,
                            model_used: candidate.id.clone(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!(
                            "attempt {}/{} failed for {}: {e}",
                            attempt + 1,
                            self.attempts_per_model,
                            candidate.id
                        );
                        last_error = e.to_string();

                        // Sleep only between attempts on the same candidate;
                        // a final failed attempt falls straight through to
                        // the next candidate.
                        if attempt + 1 < self.attempts_per_model {
                            let delay = backoff_delay(attempt, self.retry_delay_ms);
                            self.sleeper.sleep(delay).await;
                        }
                    }
                }
            }
        }

        Err(StageError::StoryGenerationExhausted {
            candidates: self.candidates.len(),
            last_error,
        })
    }

    /// One round trip against one candidate.
    ///
    /// A whitespace-only generation is not distinguished from a failed call:
    /// both feed the same retry/fallback path.
    async fn attempt(
        &self,
        endpoint: &str,
        candidate: &ModelCandidate,
        prompt: &str,
    ) -> Result<String, ClientError> {
        let payload = serde_json::json!({
            "inputs": prompt,
            "parameters": {
                "temperature": candidate.temperature,
                "max_length": candidate.max_length,
            },
        });

        let body = self.client.invoke(endpoint, &payload).await?;
        let rows: Vec<GeneratedRow> = body.json()?;
        let raw = rows
            .into_iter()
            .next()
            .and_then(|row| row.generated_text)
            .unwrap_or_default();

        let story = last_non_empty_line(&raw);
        if story.is_empty() {
            return Err(ClientError::MalformedResponse {
                endpoint: endpoint.to_string(),
                message: "generated text was empty after trimming".to_string(),
            });
        }
        Ok(story.to_string())
    }
}

fn build_prompt(caption: &str) -> String {
    STORY_PROMPT.replace("{scenario}", caption)
}

/// Last non-empty line of the raw generation, trimmed.
///
/// Generation endpoints echo the prompt and emit leading blank lines; the
/// story itself is whatever comes last.
fn last_non_empty_line(raw: &str) -> &str {
    raw.lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}
