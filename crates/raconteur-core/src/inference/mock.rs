//! Scripted inference client for tests.
//!
//! Each endpoint gets a queue of canned outcomes consumed one per call, so a
//! test can script "fail twice, then succeed" per model and assert call
//! counts and ordering afterwards.

use super::client::{InferenceClient, ResponseBody};
use crate::error::ClientError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::Mutex;

enum Scripted {
    Json(serde_json::Value),
    Bytes(Vec<u8>),
    Error(ClientError),
}

/// A fault-injecting `InferenceClient` with per-endpoint response queues.
#[derive(Default)]
pub(crate) struct ScriptedClient {
    responses: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<(String, serde_json::Value)>>,
}

impl ScriptedClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn enqueue_json(&self, endpoint: &str, value: serde_json::Value) {
        self.enqueue(endpoint, Scripted::Json(value));
    }

    pub(crate) fn enqueue_bytes(&self, endpoint: &str, bytes: Vec<u8>) {
        self.enqueue(endpoint, Scripted::Bytes(bytes));
    }

    pub(crate) fn enqueue_error(&self, endpoint: &str, error: ClientError) {
        self.enqueue(endpoint, Scripted::Error(error));
    }

    /// Shorthand for a non-2xx rejection, the most common injected fault.
    pub(crate) fn enqueue_rejection(&self, endpoint: &str, status: u16) {
        self.enqueue_error(
            endpoint,
            ClientError::RemoteRejected {
                endpoint: endpoint.to_string(),
                status,
                body: "scripted rejection".to_string(),
            },
        );
    }

    fn enqueue(&self, endpoint: &str, scripted: Scripted) {
        self.responses
            .lock()
            .unwrap()
            .entry(endpoint.to_string())
            .or_default()
            .push_back(scripted);
    }

    /// Endpoints hit so far, in call order.
    pub(crate) fn endpoints_called(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(endpoint, _)| endpoint.clone())
            .collect()
    }

    /// Number of calls made against one endpoint.
    pub(crate) fn calls_to(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _)| e == endpoint)
            .count()
    }

    /// Total calls across all endpoints.
    pub(crate) fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Payloads sent to one endpoint, in call order.
    pub(crate) fn payloads_to(&self, endpoint: &str) -> Vec<serde_json::Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _)| e == endpoint)
            .map(|(_, payload)| payload.clone())
            .collect()
    }
}

#[async_trait]
impl InferenceClient for ScriptedClient {
    async fn invoke(
        &self,
        endpoint: &str,
        payload: &serde_json::Value,
    ) -> Result<ResponseBody, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), payload.clone()));

        let scripted = self
            .responses
            .lock()
            .unwrap()
            .get_mut(endpoint)
            .and_then(|queue| queue.pop_front());

        match scripted {
            Some(Scripted::Json(value)) => Ok(ResponseBody::new(
                endpoint,
                serde_json::to_vec(&value).unwrap(),
            )),
            Some(Scripted::Bytes(bytes)) => Ok(ResponseBody::new(endpoint, bytes)),
            Some(Scripted::Error(error)) => Err(error),
            None => panic!("no scripted response left for {endpoint}"),
        }
    }
}
