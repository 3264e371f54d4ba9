//! The inference client trait and raw response wrapper.

use crate::error::ClientError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// A single request to a named remote model endpoint.
///
/// Implementations perform exactly one round trip per call and never retry
/// internally; retry and fallback policy belongs to the calling stage. Uses
/// `async_trait` because native async fn in trait is not object-safe (the
/// stages share one `Arc<dyn InferenceClient>`).
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// POST `payload` to `endpoint` and return the raw success body.
    ///
    /// Any non-success status is an error; the caller decides what to do
    /// with the body bytes of a success.
    async fn invoke(
        &self,
        endpoint: &str,
        payload: &serde_json::Value,
    ) -> Result<ResponseBody, ClientError>;
}

/// Raw bytes of a successful endpoint response.
///
/// Captioning and story generation decode these as JSON; narration takes the
/// bytes verbatim as the audio payload.
#[derive(Debug, Clone)]
pub struct ResponseBody {
    endpoint: String,
    bytes: Vec<u8>,
}

impl ResponseBody {
    pub fn new(endpoint: &str, bytes: Vec<u8>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            bytes,
        }
    }

    /// Decode the body as JSON into the expected shape.
    ///
    /// A success status with a body that doesn't match the shape is a
    /// malformed response, not a transport problem.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.bytes).map_err(|e| ClientError::MalformedResponse {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        })
    }

    /// Take the body verbatim.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Endpoint the body came from, for diagnostics.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
