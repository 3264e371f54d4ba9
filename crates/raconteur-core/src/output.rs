//! Persistence of run artifacts: the audio file and an optional JSON record.

use crate::types::AudioPayload;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Machine-readable summary of one completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    /// The image URL the run started from
    pub image_url: String,

    /// Caption the image model produced
    pub caption: String,

    /// The generated story text
    pub story: String,

    /// Candidate model that produced the story
    pub model_used: String,

    /// Where the audio landed, if it was saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_path: Option<PathBuf>,
}

/// Write the synthesized audio to disk, creating parent directories.
///
/// The bytes land exactly as the narration endpoint returned them.
pub fn save_audio(path: &Path, audio: &AudioPayload) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &audio.bytes)?;
    tracing::info!("saved {} bytes of audio to {}", audio.len(), path.display());
    Ok(())
}

/// Serialize a run record as JSON to any writer.
pub fn write_record<W: Write>(writer: &mut W, record: &RunRecord, pretty: bool) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, record).map_err(io::Error::other)?;
    } else {
        serde_json::to_writer(&mut *writer, record).map_err(io::Error::other)?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RunRecord {
        RunRecord {
            image_url: "http://example.com/cat.jpg".to_string(),
            caption: "a cat".to_string(),
            story: "A tiny tale.".to_string(),
            model_used: "first/model".to_string(),
            audio_path: Some(PathBuf::from("story.flac")),
        }
    }

    #[test]
    fn test_save_audio_writes_bytes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story.flac");
        let audio = AudioPayload {
            bytes: vec![0x66, 0x4c, 0x61, 0x43],
        };

        save_audio(&path, &audio).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), audio.bytes);
    }

    #[test]
    fn test_save_audio_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/story.flac");
        let audio = AudioPayload { bytes: vec![1] };

        save_audio(&path, &audio).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_write_record_is_valid_json() {
        let mut buf = Vec::new();
        write_record(&mut buf, &record(), false).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["caption"], "a cat");
        assert_eq!(parsed["model_used"], "first/model");
        assert_eq!(parsed["audio_path"], "story.flac");
    }

    #[test]
    fn test_write_record_omits_missing_audio_path() {
        let mut buf = Vec::new();
        let record = RunRecord {
            audio_path: None,
            ..record()
        };
        write_record(&mut buf, &record, true).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(parsed.get("audio_path").is_none());
    }
}
