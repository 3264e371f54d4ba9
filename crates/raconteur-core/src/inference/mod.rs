//! Remote inference client.
//!
//! Every pipeline stage talks to its model endpoint through the
//! [`InferenceClient`] trait; the HTTP implementation lives in [`http`] and
//! tests substitute scripted fakes.

mod client;
mod http;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{InferenceClient, ResponseBody};
pub use http::HttpInferenceClient;
