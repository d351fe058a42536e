//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// HTTP client configuration
pub mod http {
    use super::*;

    /// Connection timeout for HTTP requests
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Per-attempt request timeout
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(50);

    /// End-to-end ceiling per model, including retries and backoff.
    /// A stuck provider must never delay the rest of a comparison batch.
    pub const MODEL_DEADLINE: Duration = Duration::from_secs(60);

    /// User-Agent sent with every provider request
    pub const USER_AGENT: &str = "Prism/0.1";
}

/// LLM request configuration
pub mod ai {
    /// Maximum output tokens requested from every provider
    pub const MAX_OUTPUT_TOKENS: usize = 1000;

    /// Sampling temperature for every provider
    pub const TEMPERATURE: f32 = 0.3;

    /// Approximate tokens per whitespace-separated word
    pub const TOKENS_PER_WORD: f64 = 1.3;

    /// Instructional preamble appended to the user prompt (or sent as the
    /// system turn for chat providers that support one). A deployment
    /// profile, identical for every call.
    pub const ANSWER_GUIDELINES: &str = "\
You are an assistant specialised in consulting and project management. \
Answer in a professional, structured way: use headings and subheadings to \
organise the answer, bullet lists for steps, advantages and drawbacks, \
numbered lists for sequential processes, and bold for the key points. \
Give concrete examples where relevant and keep the answer under 500 words.";
}
