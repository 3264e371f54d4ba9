//! The `raconteur tell` command: run the full pipeline for one image URL.

use anyhow::Context;
use clap::Args;
use console::style;
use indicatif::ProgressBar;
use raconteur_core::{
    save_audio, write_record, Config, ImageUrlValidator, PipelineOutcome, RunRecord, StageEvent,
    StoryPipeline,
};
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the `tell` command.
#[derive(Args, Debug)]
pub struct TellArgs {
    /// Image URL to caption and narrate
    pub url: String,

    /// Where to write the synthesized audio (default from config)
    #[arg(long)]
    pub audio_out: Option<PathBuf>,

    /// Write a JSON record of the run (caption, story, model) to this path
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Skip the preflight check that the URL serves an image
    #[arg(long)]
    pub no_validate: bool,
}

/// Execute the tell command.
pub async fn execute(args: TellArgs) -> anyhow::Result<()> {
    let config = Config::load()?;

    if !args.no_validate {
        let validator =
            ImageUrlValidator::new(Duration::from_millis(config.inference.timeout_ms));
        validator
            .validate(&args.url)
            .await
            .context("image URL rejected before the pipeline ran")?;
        println!("{} image URL serves an image", style("✓").green());
    }

    let pipeline = StoryPipeline::from_config(&config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));

    let outcome = pipeline
        .run_with_observer(&args.url, |event| match event {
            StageEvent::Started(stage) => spinner.set_message(format!("{stage}...")),
            StageEvent::Finished(stage) => {
                spinner.println(format!("{} {stage} complete", style("✓").green()));
            }
        })
        .await;
    spinner.finish_and_clear();

    match outcome {
        PipelineOutcome::Complete(artifacts) => {
            let audio_path = args.audio_out.unwrap_or_else(|| config.audio_path());
            save_audio(&audio_path, &artifacts.audio)
                .with_context(|| format!("failed to save audio to {}", audio_path.display()))?;

            println!();
            println!("{}", style("Caption").bold());
            println!("  {}", artifacts.caption);
            println!("{}", style("Story").bold());
            println!("  {}", artifacts.story.text);
            println!(
                "  {} {}",
                style("generated by").dim(),
                artifacts.story.model_used
            );
            println!("{}", style("Audio").bold());
            println!("  {}", audio_path.display());

            if let Some(record_path) = &args.record {
                let record = RunRecord {
                    image_url: args.url,
                    caption: artifacts.caption,
                    story: artifacts.story.text,
                    model_used: artifacts.story.model_used,
                    audio_path: Some(audio_path),
                };
                let mut file = std::fs::File::create(record_path)
                    .with_context(|| format!("failed to create {}", record_path.display()))?;
                write_record(&mut file, &record, true)?;
                println!("  {} {}", style("record").dim(), record_path.display());
            }

            Ok(())
        }
        PipelineOutcome::Halted(failure) => {
            eprintln!(
                "{} {} failed: {}",
                style("✗").red(),
                failure.stage,
                failure.error
            );
            // Show whatever the run managed to produce before the halt
            if let Some(caption) = failure.caption {
                eprintln!("  caption: {caption}");
            }
            if let Some(story) = failure.story {
                eprintln!("  story: {}", story.text);
            }
            anyhow::bail!("pipeline halted at {}", failure.stage)
        }
    }
}
