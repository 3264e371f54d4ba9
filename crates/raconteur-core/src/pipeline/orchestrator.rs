//! Pipeline orchestration: caption → story → narration.
//!
//! The orchestrator sequences the three stages, halts on the first failure,
//! and reports which stage halted the run. It performs no recovery of its
//! own; retry policy lives entirely inside the stages.

use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{ConfigError, StageError};
use crate::inference::{HttpInferenceClient, InferenceClient};
use crate::types::{AudioPayload, StoryResult};

use super::caption::Captioner;
use super::narrate::Narrator;
use super::story::StoryGenerator;

/// The three pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Captioning,
    StoryGeneration,
    Narration,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Captioning => write!(f, "captioning"),
            Stage::StoryGeneration => write!(f, "story generation"),
            Stage::Narration => write!(f, "narration"),
        }
    }
}

/// Progress notification emitted while a run executes.
///
/// Lets a front end render per-stage status without the orchestrator knowing
/// anything about presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageEvent {
    Started(Stage),
    Finished(Stage),
}

/// Everything a successful run produces.
#[derive(Debug, Clone)]
pub struct StoryArtifacts {
    pub caption: String,
    pub story: StoryResult,
    pub audio: AudioPayload,
}

/// A halted run: the failing stage, why, and whatever was produced before.
#[derive(Debug)]
pub struct PipelineFailure {
    pub stage: Stage,
    pub error: StageError,
    pub caption: Option<String>,
    pub story: Option<StoryResult>,
}

/// Result of one pipeline run.
#[derive(Debug)]
pub enum PipelineOutcome {
    Complete(StoryArtifacts),
    Halted(PipelineFailure),
}

impl PipelineOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, PipelineOutcome::Complete(_))
    }
}

/// The full image-to-narrated-story pipeline.
pub struct StoryPipeline {
    captioner: Captioner,
    generator: StoryGenerator,
    narrator: Narrator,
}

impl StoryPipeline {
    /// Wire the three stages against one shared inference client.
    pub fn new(config: &Config, client: Arc<dyn InferenceClient>) -> Self {
        let captioner = Captioner::new(
            client.clone(),
            &config.inference.model_endpoint(&config.caption.model),
        );
        let generator =
            StoryGenerator::new(client.clone(), &config.inference.endpoint_base, &config.story);
        let narrator = Narrator::new(
            client,
            &config.inference.model_endpoint(&config.narration.model),
        );
        Self {
            captioner,
            generator,
            narrator,
        }
    }

    /// Build the pipeline with an HTTP client from configuration.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let client: Arc<dyn InferenceClient> =
            Arc::new(HttpInferenceClient::from_config(&config.inference)?);
        Ok(Self::new(config, client))
    }

    /// Run the pipeline for one image URL.
    pub async fn run(&self, image_url: &str) -> PipelineOutcome {
        self.run_with_observer(image_url, |_| {}).await
    }

    /// Run the pipeline, emitting a [`StageEvent`] at each stage boundary.
    ///
    /// Stages execute strictly in order; the first failure halts the run and
    /// later stages are never invoked.
    pub async fn run_with_observer<F>(&self, image_url: &str, observe: F) -> PipelineOutcome
    where
        F: Fn(StageEvent),
    {
        tracing::info!("pipeline run for {image_url}");

        observe(StageEvent::Started(Stage::Captioning));
        let caption = match self.captioner.caption(image_url).await {
            Ok(caption) => caption,
            Err(error) => {
                tracing::error!("halted at captioning: {error}");
                return PipelineOutcome::Halted(PipelineFailure {
                    stage: Stage::Captioning,
                    error,
                    caption: None,
                    story: None,
                });
            }
        };
        observe(StageEvent::Finished(Stage::Captioning));

        observe(StageEvent::Started(Stage::StoryGeneration));
        let story = match self.generator.generate(&caption).await {
            Ok(story) => story,
            Err(error) => {
                tracing::error!("halted at story generation: {error}");
                return PipelineOutcome::Halted(PipelineFailure {
                    stage: Stage::StoryGeneration,
                    error,
                    caption: Some(caption),
                    story: None,
                });
            }
        };
        observe(StageEvent::Finished(Stage::StoryGeneration));

        observe(StageEvent::Started(Stage::Narration));
        let audio = match self.narrator.synthesize(&story).await {
            Ok(audio) => audio,
            Err(error) => {
                tracing::error!("halted at narration: {error}");
                return PipelineOutcome::Halted(PipelineFailure {
                    stage: Stage::Narration,
                    error,
                    caption: Some(caption),
                    story: Some(story),
                });
            }
        };
        observe(StageEvent::Finished(Stage::Narration));

        PipelineOutcome::Complete(StoryArtifacts {
            caption,
            story,
            audio,
        })
    }
}
