//! The story pipeline and its stages.
//!
//! - **caption**: image URL → text caption (single shot)
//! - **story**: caption → short story (model fallback with bounded retry)
//! - **narrate**: story → speech audio (single shot)
//! - **retry**: backoff arithmetic and the sleep seam
//! - **validate**: image URL preflight
//! - **orchestrator**: sequences the stages and halts on first failure

pub mod caption;
pub mod narrate;
pub mod orchestrator;
pub mod retry;
pub mod story;
pub mod validate;

// Re-exports for convenient access
pub use caption::Captioner;
pub use narrate::Narrator;
pub use orchestrator::{
    PipelineFailure, PipelineOutcome, Stage, StageEvent, StoryArtifacts, StoryPipeline,
};
pub use retry::{backoff_delay, Sleeper, TokioSleeper};
pub use story::StoryGenerator;
pub use validate::ImageUrlValidator;
