//! Error taxonomy for dispatch and invocation
//!
//! `QueryError` covers caller mistakes that surface immediately;
//! `InvokeError` classifies provider failures so the retry layer can decide
//! eligibility without inspecting provider-specific codes.

use thiserror::Error;

use crate::providers::ProviderId;

/// Caller-visible errors, reported before any provider is contacted
#[derive(Debug, Error)]
pub enum QueryError {
    /// Model name not present in the registry
    #[error("unknown model '{model}', available models: {}", .available.join(", "))]
    UnknownModel {
        model: String,
        available: Vec<String>,
    },

    /// Prompt empty after trimming
    #[error("prompt is empty")]
    EmptyPrompt,
}

/// Classified provider invocation failure
///
/// Only `Throttled` is retry-eligible; every other kind terminates the
/// attempt sequence and is translated into a fallback response.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// Provider-side rate limit (HTTP 429), transient
    #[error("throttled by provider: {0}")]
    Throttled(String),

    /// Rejected credentials (HTTP 401/403)
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Provider rejected the request body (HTTP 400/422)
    #[error("request rejected by provider: {0}")]
    ValidationFailed(String),

    /// Provider-side outage (HTTP 5xx)
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Any other non-success status
    #[error("unexpected provider status {status}: {message}")]
    Unknown { status: u16, message: String },

    /// Transport failure before a status was received
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Registry resolved a provider the credential set does not cover.
    /// An internal invariant violation, logged and never retried.
    #[error("no credentials configured for {0}")]
    MissingCredentials(ProviderId),
}

impl InvokeError {
    /// Classify an HTTP error status into a failure kind
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            429 => InvokeError::Throttled(message),
            401 | 403 => InvokeError::Unauthorized(message),
            400 | 422 => InvokeError::ValidationFailed(message),
            500 | 502 | 503 | 504 => InvokeError::ServiceUnavailable(message),
            _ => InvokeError::Unknown { status, message },
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, InvokeError::Throttled(_))
    }
}
