//! Provider credentials and endpoint resolution
//!
//! Loaded once at process start by the caller and treated as read-only for
//! the process lifetime.

use std::collections::HashMap;

/// Direct Anthropic Messages endpoint
pub const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";

/// API version header for the direct Anthropic API
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Region-scoped Bedrock runtime credentials, shared by both Bedrock
/// families
#[derive(Debug, Clone)]
pub struct BedrockConfig {
    /// AWS region hosting the inference profiles (e.g. `eu-west-3`)
    pub region: String,
    /// Bedrock long-term API key, sent as a bearer token
    pub api_key: String,
}

/// One Azure OpenAI deployment: endpoint, key, and API version are scoped
/// to the deployment, not to the provider
#[derive(Debug, Clone)]
pub struct AzureDeployment {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,
    /// Deployment name inside the resource
    pub deployment: String,
    /// API version query parameter (varies per deployment)
    pub api_version: String,
    pub api_key: String,
}

/// Full credential set for every provider family
///
/// Any slot may be empty; querying a model whose provider has no
/// credentials yields a fallback response rather than a crash.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub bedrock: Option<BedrockConfig>,
    /// Azure deployments keyed by model display name
    pub azure: HashMap<String, AzureDeployment>,
    pub anthropic_api_key: Option<String>,
}

impl Credentials {
    /// Credential set with every slot empty (useful in tests)
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Bedrock runtime InvokeModel URL for a wire model id
pub fn bedrock_invoke_url(region: &str, wire_id: &str) -> String {
    format!("https://bedrock-runtime.{region}.amazonaws.com/model/{wire_id}/invoke")
}

/// Azure chat/completions URL for one deployment
pub fn azure_chat_url(deployment: &AzureDeployment) -> String {
    format!(
        "{}/openai/deployments/{}/chat/completions?api-version={}",
        deployment.endpoint.trim_end_matches('/'),
        deployment.deployment,
        deployment.api_version
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bedrock_url_is_region_scoped() {
        let url = bedrock_invoke_url("eu-west-3", "mistral.mixtral-8x7b-instruct-v0:1");
        assert_eq!(
            url,
            "https://bedrock-runtime.eu-west-3.amazonaws.com/model/mistral.mixtral-8x7b-instruct-v0:1/invoke"
        );
    }

    #[test]
    fn test_azure_url_is_deployment_scoped() {
        let deployment = AzureDeployment {
            endpoint: "https://example.openai.azure.com/".to_string(),
            deployment: "prod-gpt-4o".to_string(),
            api_version: "2025-01-01-preview".to_string(),
            api_key: "secret".to_string(),
        };
        assert_eq!(
            azure_chat_url(&deployment),
            "https://example.openai.azure.com/openai/deployments/prod-gpt-4o/chat/completions?api-version=2025-01-01-preview"
        );
    }

    #[test]
    fn test_empty_credentials_have_no_providers() {
        let credentials = Credentials::empty();
        assert!(credentials.bedrock.is_none());
        assert!(credentials.azure.is_empty());
        assert!(credentials.anthropic_api_key.is_none());
    }
}
