//! HTTP implementation of the inference client.
//!
//! Speaks to hosted inference endpoints: JSON POST with a bearer token,
//! one round trip per call.

use super::client::{InferenceClient, ResponseBody};
use crate::config::{resolve_env_var, InferenceConfig};
use crate::error::{ClientError, ConfigError};
use async_trait::async_trait;
use std::time::Duration;

/// Inference client backed by `reqwest`.
#[derive(Debug)]
pub struct HttpInferenceClient {
    client: reqwest::Client,
    api_token: String,
    timeout: Duration,
}

impl HttpInferenceClient {
    pub fn new(api_token: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_token: api_token.to_string(),
            timeout,
        }
    }

    /// Build a client from configuration, resolving the `${VAR}` token
    /// reference. The token is captured here once; call sites never touch
    /// the environment.
    pub fn from_config(config: &InferenceConfig) -> Result<Self, ConfigError> {
        let token = resolve_env_var(&config.api_token).ok_or_else(|| {
            ConfigError::ValidationError(
                "inference API token not set. Set HUGGINGFACEHUB_API_TOKEN \
                 or put a literal token in inference.api_token."
                    .to_string(),
            )
        })?;
        Ok(Self::new(&token, Duration::from_millis(config.timeout_ms)))
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn invoke(
        &self,
        endpoint: &str,
        payload: &serde_json::Value,
    ) -> Result<ResponseBody, ClientError> {
        tracing::debug!("POST {endpoint}");

        let resp = self
            .client
            .post(endpoint)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Content-Type", "application/json")
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::RemoteRejected {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await.map_err(|e| ClientError::Transport {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?;

        Ok(ResponseBody::new(endpoint, bytes.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InferenceConfig;

    #[test]
    fn test_from_config_with_literal_token() {
        let config = InferenceConfig {
            api_token: "hf_literal_token".to_string(),
            ..Default::default()
        };
        assert!(HttpInferenceClient::from_config(&config).is_ok());
    }

    #[test]
    fn test_from_config_rejects_unset_token() {
        let config = InferenceConfig {
            api_token: "${RACONTEUR_TEST_TOKEN_NOT_SET}".to_string(),
            ..Default::default()
        };
        let err = HttpInferenceClient::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("token"));
    }
}
