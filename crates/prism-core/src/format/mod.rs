//! Wire format handling
//!
//! Abstracts the differences between the provider request shapes. Each
//! format handler knows how to build a complete request body for one
//! prompt; parsing lives in [`response`].

pub mod anthropic;
pub mod azure;
pub mod mistral;
pub mod response;

use serde_json::Value;

use crate::constants;
use crate::providers::ProviderId;

/// Trait for building provider-specific request bodies
///
/// Implementations convert a single prompt into the exact JSON shape the
/// provider's endpoint expects. Deterministic: identical input always
/// produces an identical body.
pub trait RequestFormat: Send + Sync {
    /// Build the complete request body for one prompt
    fn build_request_body(&self, wire_id: &str, prompt: &str, options: &RequestOptions) -> Value;
}

/// Options for building requests
///
/// A deployment profile, not per-call state: the defaults come from
/// [`constants::ai`] and stay fixed across calls.
pub struct RequestOptions<'a> {
    pub max_tokens: usize,
    pub temperature: f32,
    /// Instructional preamble. Chat providers with a system turn send it
    /// there; the Bedrock families append it after the user's raw text so
    /// the prompt always leads the templated string.
    pub preamble: Option<&'a str>,
}

impl<'a> Default for RequestOptions<'a> {
    fn default() -> Self {
        Self {
            max_tokens: constants::ai::MAX_OUTPUT_TOKENS,
            temperature: constants::ai::TEMPERATURE,
            preamble: Some(constants::ai::ANSWER_GUIDELINES),
        }
    }
}

impl<'a> RequestOptions<'a> {
    /// Profile without the instructional preamble (raw prompt passthrough)
    pub fn bare() -> Self {
        Self {
            preamble: None,
            ..Self::default()
        }
    }
}

/// Inline the preamble after the user's raw text.
///
/// Used by the providers that take one combined prompt string or message.
/// The prompt comes first so templated bodies always start with it.
pub(crate) fn instructed_prompt(prompt: &str, options: &RequestOptions<'_>) -> String {
    match options.preamble {
        Some(preamble) => format!("{prompt}\n\n{preamble}"),
        None => prompt.to_string(),
    }
}

/// Select the request format for a provider family
pub fn format_for_provider(provider: ProviderId) -> Box<dyn RequestFormat> {
    match provider {
        ProviderId::BedrockAnthropic => Box::new(anthropic::AnthropicChatFormat::new()),
        ProviderId::DirectAnthropic => Box::new(anthropic::DirectAnthropicFormat::new()),
        ProviderId::BedrockMistral => Box::new(mistral::MistralInstructFormat::new()),
        ProviderId::AzureOpenAi => Box::new(azure::AzureChatFormat::new()),
    }
}
