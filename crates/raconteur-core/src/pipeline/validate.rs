//! Image URL preflight validation.
//!
//! Runs before the pipeline is invoked: the URL must answer with a success
//! status and an `image/*` content type. The pipeline itself never
//! re-validates.

use crate::error::ValidationError;
use std::time::Duration;

/// Validates that a URL actually serves an image.
pub struct ImageUrlValidator {
    client: reqwest::Client,
    timeout: Duration,
}

impl ImageUrlValidator {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    /// Fetch `url` and check status and content type.
    pub async fn validate(&self, url: &str) -> Result<(), ValidationError> {
        let resp = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ValidationError::Unreachable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ValidationError::BadStatus(status.as_u16()));
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !is_image_content_type(&content_type) {
            return Err(ValidationError::NotAnImage(content_type));
        }

        Ok(())
    }
}

/// Whether a Content-Type header value denotes an image.
fn is_image_content_type(content_type: &str) -> bool {
    content_type.trim().to_ascii_lowercase().starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_content_types_accepted() {
        assert!(is_image_content_type("image/jpeg"));
        assert!(is_image_content_type("image/png; charset=binary"));
        assert!(is_image_content_type("IMAGE/WEBP"));
        assert!(is_image_content_type("  image/gif"));
    }

    #[test]
    fn test_non_image_content_types_rejected() {
        assert!(!is_image_content_type("text/html"));
        assert!(!is_image_content_type("application/json"));
        assert!(!is_image_content_type(""));
        // No sniffing past the type itself
        assert!(!is_image_content_type("text/html; image/png"));
    }
}
