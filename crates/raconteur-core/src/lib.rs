//! Raconteur Core - Embeddable image-to-narrated-story pipeline.
//!
//! Raconteur turns an image URL into a short narrated story through three
//! dependent remote inference calls:
//!
//! ```text
//! Image URL → Caption → Story (model fallback + retry) → Speech audio
//! ```
//!
//! Stages run strictly in sequence; the first failure halts the run. Only
//! story generation recovers from transient endpoint failures, by walking an
//! ordered candidate-model list with exponential backoff.
//!
//! # Usage
//!
//! ```rust,ignore
//! use raconteur_core::{Config, PipelineOutcome, StoryPipeline};
//!
//! #[tokio::main]
//! async fn main() -> raconteur_core::Result<()> {
//!     let config = Config::load()?;
//!     let pipeline = StoryPipeline::from_config(&config)?;
//!
//!     match pipeline.run("http://example.com/cat.jpg").await {
//!         PipelineOutcome::Complete(artifacts) => println!("{}", artifacts.story.text),
//!         PipelineOutcome::Halted(failure) => eprintln!("{}: {}", failure.stage, failure.error),
//!     }
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod inference;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ClientError, ConfigError, RaconteurError, Result, StageError, ValidationError};
pub use inference::{HttpInferenceClient, InferenceClient, ResponseBody};
pub use output::{save_audio, write_record, RunRecord};
pub use pipeline::{
    ImageUrlValidator, PipelineFailure, PipelineOutcome, Stage, StageEvent, StoryArtifacts,
    StoryPipeline,
};
pub use types::{AudioPayload, ModelCandidate, StoryResult};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
