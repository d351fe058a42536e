//! Provider identifiers and authentication styles
//!
//! Defines the provider families Prism can dispatch to and how each one
//! expects its API key to be sent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for each supported provider family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderId {
    /// Anthropic models served through AWS Bedrock (Messages API body,
    /// model id in the URL)
    BedrockAnthropic,
    /// Mistral-family models served through AWS Bedrock (single templated
    /// prompt string)
    BedrockMistral,
    /// Azure OpenAI chat deployments (endpoint and key per deployment)
    AzureOpenAi,
    /// Anthropic's own Messages API
    DirectAnthropic,
}

impl ProviderId {
    /// Get all provider families, Bedrock first (most models)
    pub fn all() -> &'static [ProviderId] {
        &[
            ProviderId::BedrockAnthropic,
            ProviderId::BedrockMistral,
            ProviderId::AzureOpenAi,
            ProviderId::DirectAnthropic,
        ]
    }

    /// Get the storage key for this provider (used in credential lookups)
    pub fn storage_key(&self) -> &'static str {
        match self {
            ProviderId::BedrockAnthropic => "bedrock_anthropic",
            ProviderId::BedrockMistral => "bedrock_mistral",
            ProviderId::AzureOpenAi => "azure_openai",
            ProviderId::DirectAnthropic => "anthropic",
        }
    }

    /// How this provider expects its API key
    pub fn auth_header(&self) -> AuthHeader {
        match self {
            // Bedrock long-term API keys are sent as a bearer token
            ProviderId::BedrockAnthropic | ProviderId::BedrockMistral => AuthHeader::Bearer,
            ProviderId::AzureOpenAi => AuthHeader::ApiKey,
            ProviderId::DirectAnthropic => AuthHeader::XApiKey,
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::BedrockAnthropic => write!(f, "AWS Bedrock (Anthropic)"),
            ProviderId::BedrockMistral => write!(f, "AWS Bedrock (Mistral)"),
            ProviderId::AzureOpenAi => write!(f, "Azure OpenAI"),
            ProviderId::DirectAnthropic => write!(f, "Anthropic"),
        }
    }
}

/// How to send the API key in requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthHeader {
    /// Use `Authorization: Bearer <key>` header (Bedrock API keys)
    Bearer,
    /// Use `x-api-key: <key>` header (Anthropic style)
    XApiKey,
    /// Use `api-key: <key>` header (Azure OpenAI style)
    ApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id_display() {
        assert_eq!(
            ProviderId::BedrockAnthropic.to_string(),
            "AWS Bedrock (Anthropic)"
        );
        assert_eq!(ProviderId::AzureOpenAi.to_string(), "Azure OpenAI");
        assert_eq!(ProviderId::DirectAnthropic.to_string(), "Anthropic");
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(ProviderId::BedrockMistral.storage_key(), "bedrock_mistral");
        assert_eq!(ProviderId::AzureOpenAi.storage_key(), "azure_openai");
    }

    #[test]
    fn test_auth_headers() {
        assert_eq!(
            ProviderId::BedrockAnthropic.auth_header(),
            AuthHeader::Bearer
        );
        assert_eq!(ProviderId::AzureOpenAi.auth_header(), AuthHeader::ApiKey);
        assert_eq!(
            ProviderId::DirectAnthropic.auth_header(),
            AuthHeader::XApiKey
        );
    }

    #[test]
    fn test_all_covers_every_family() {
        assert_eq!(ProviderId::all().len(), 4);
    }
}
