//! Synthetic fallback responses
//!
//! When retries are exhausted or a non-retryable failure occurs, the
//! comparison still returns one entry per requested model. These texts
//! describe the failure category in place of the model's answer.

use crate::error::InvokeError;

/// Human-readable placeholder for a failed invocation
pub fn fallback_text(error: &InvokeError, model: &str) -> String {
    match error {
        InvokeError::Throttled(_) => format!(
            "{model} is being rate limited by its provider. The request was \
             retried several times without success; try again in a few minutes."
        ),
        InvokeError::Unauthorized(_) => format!(
            "{model} rejected the configured credentials. Check the API key \
             for this provider."
        ),
        InvokeError::ValidationFailed(_) => format!(
            "{model}'s provider rejected the request as invalid. The prompt \
             may be too long for this model."
        ),
        InvokeError::ServiceUnavailable(_) => format!(
            "{model} is temporarily unavailable on the provider side. The \
             other models in this comparison are unaffected."
        ),
        InvokeError::Unknown { status, .. } => format!(
            "{model} returned an unexpected status ({status}). No answer is \
             available for this model."
        ),
        InvokeError::Network(_) => format!(
            "{model} could not be reached. Check the network connection and \
             the provider endpoint configuration."
        ),
        InvokeError::MissingCredentials(provider) => format!(
            "{model} is not configured: no credentials were supplied for \
             {provider}."
        ),
    }
}
