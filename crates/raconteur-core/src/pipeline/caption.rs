//! Image captioning stage.
//!
//! A single shot against the captioning endpoint: no retry, no fallback.
//! Flakiness here surfaces immediately as a stage failure.

use crate::error::{ClientError, StageError};
use crate::inference::InferenceClient;
use serde::Deserialize;
use std::sync::Arc;

/// Expected shape of a captioning response: an array whose first element
/// carries the generated text.
#[derive(Deserialize)]
struct CaptionRow {
    generated_text: Option<String>,
}

/// Turns an image URL into a text caption.
pub struct Captioner {
    client: Arc<dyn InferenceClient>,
    endpoint: String,
}

impl Captioner {
    pub fn new(client: Arc<dyn InferenceClient>, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    /// Caption the image behind `image_url`.
    ///
    /// The URL travels as the request payload; the endpoint fetches the
    /// image itself.
    pub async fn caption(&self, image_url: &str) -> Result<String, StageError> {
        let payload = serde_json::json!({ "inputs": image_url });

        let body = self
            .client
            .invoke(&self.endpoint, &payload)
            .await
            .map_err(|e| StageError::CaptioningFailed(e.to_string()))?;

        let rows: Vec<CaptionRow> = body
            .json()
            .map_err(|e| StageError::CaptioningFailed(e.to_string()))?;

        let caption = rows
            .into_iter()
            .next()
            .and_then(|row| row.generated_text)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                // Success status but nothing usable in the body
                StageError::CaptioningFailed(
                    ClientError::MalformedResponse {
                        endpoint: self.endpoint.clone(),
                        message: "response carried no generated_text".to_string(),
                    }
                    .to_string(),
                )
            })?;

        tracing::info!("caption: {caption}");
        Ok(caption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::mock::ScriptedClient;
    use serde_json::json;

    const ENDPOINT: &str = "https://hf.test/models/blip";

    fn captioner(client: Arc<ScriptedClient>) -> Captioner {
        Captioner::new(client, ENDPOINT)
    }

    #[tokio::test]
    async fn test_caption_success() {
        let client = Arc::new(ScriptedClient::new());
        client.enqueue_json(
            ENDPOINT,
            json!([{ "generated_text": "a cat sitting on a windowsill" }]),
        );

        let caption = captioner(client.clone())
            .caption("http://example.com/cat.jpg")
            .await
            .unwrap();

        assert_eq!(caption, "a cat sitting on a windowsill");
        assert_eq!(client.calls_to(ENDPOINT), 1);
        // The image URL is the payload, nothing else
        assert_eq!(
            client.payloads_to(ENDPOINT)[0],
            json!({ "inputs": "http://example.com/cat.jpg" })
        );
    }

    #[tokio::test]
    async fn test_caption_rejection_fails_without_retry() {
        let client = Arc::new(ScriptedClient::new());
        client.enqueue_rejection(ENDPOINT, 503);

        let err = captioner(client.clone())
            .caption("http://example.com/cat.jpg")
            .await
            .unwrap_err();

        assert!(matches!(err, StageError::CaptioningFailed(_)));
        assert!(err.to_string().contains("503"));
        assert_eq!(client.calls_to(ENDPOINT), 1);
    }

    #[tokio::test]
    async fn test_caption_missing_field_is_failure() {
        let client = Arc::new(ScriptedClient::new());
        client.enqueue_json(ENDPOINT, json!([{ "score": 0.9 }]));

        let err = captioner(client)
            .caption("http://example.com/cat.jpg")
            .await
            .unwrap_err();

        assert!(matches!(err, StageError::CaptioningFailed(_)));
        assert!(err.to_string().contains("generated_text"));
    }

    #[tokio::test]
    async fn test_caption_empty_array_is_failure() {
        let client = Arc::new(ScriptedClient::new());
        client.enqueue_json(ENDPOINT, json!([]));

        let err = captioner(client)
            .caption("http://example.com/cat.jpg")
            .await
            .unwrap_err();

        assert!(matches!(err, StageError::CaptioningFailed(_)));
    }

    #[tokio::test]
    async fn test_caption_whitespace_only_is_failure() {
        let client = Arc::new(ScriptedClient::new());
        client.enqueue_json(ENDPOINT, json!([{ "generated_text": "   \n " }]));

        let err = captioner(client)
            .caption("http://example.com/cat.jpg")
            .await
            .unwrap_err();

        assert!(matches!(err, StageError::CaptioningFailed(_)));
    }

    #[tokio::test]
    async fn test_caption_non_array_body_is_failure() {
        let client = Arc::new(ScriptedClient::new());
        client.enqueue_json(ENDPOINT, json!({ "error": "model loading" }));

        let err = captioner(client)
            .caption("http://example.com/cat.jpg")
            .await
            .unwrap_err();

        assert!(matches!(err, StageError::CaptioningFailed(_)));
    }
}
