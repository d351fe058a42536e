//! Environment-based credential loading
//!
//! The core treats credentials as an injected, read-only value; this module
//! is where they come from in the CLI. A missing variable leaves that
//! provider unconfigured rather than failing startup, so a partially
//! configured environment can still compare the models it has keys for.

use std::collections::HashMap;
use std::env;

use prism_core::{AzureDeployment, BedrockConfig, Credentials};
use tracing::debug;

/// Default AWS region for the Bedrock inference profiles
const DEFAULT_BEDROCK_REGION: &str = "eu-west-3";

/// Azure deployments: (model display name, env prefix, default API version)
///
/// Each deployment reads `{PREFIX}_API_KEY`, `{PREFIX}_ENDPOINT`,
/// `{PREFIX}_DEPLOYMENT`, and optionally `{PREFIX}_API_VERSION`.
const AZURE_DEPLOYMENTS: &[(&str, &str, &str)] = &[
    ("GPT-4o (Azure)", "GPT4O", "2025-01-01-preview"),
    ("GPT-4o Mini (Azure)", "GPT4O_MINI", "2024-12-01-preview"),
];

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Load the full credential set from the environment
pub fn load_credentials() -> Credentials {
    let bedrock = var("PRISM_BEDROCK_API_KEY").map(|api_key| BedrockConfig {
        region: var("PRISM_AWS_REGION").unwrap_or_else(|| DEFAULT_BEDROCK_REGION.to_string()),
        api_key,
    });
    if bedrock.is_none() {
        debug!("PRISM_BEDROCK_API_KEY not set, Bedrock models unconfigured");
    }

    let mut azure = HashMap::new();
    for (model_name, prefix, default_api_version) in AZURE_DEPLOYMENTS {
        let (Some(api_key), Some(endpoint), Some(deployment)) = (
            var(&format!("{prefix}_API_KEY")),
            var(&format!("{prefix}_ENDPOINT")),
            var(&format!("{prefix}_DEPLOYMENT")),
        ) else {
            debug!("{prefix}_* not fully set, {model_name} unconfigured");
            continue;
        };
        azure.insert(
            model_name.to_string(),
            AzureDeployment {
                endpoint,
                deployment,
                api_version: var(&format!("{prefix}_API_VERSION"))
                    .unwrap_or_else(|| default_api_version.to_string()),
                api_key,
            },
        );
    }

    Credentials {
        bedrock,
        azure,
        anthropic_api_key: var("ANTHROPIC_API_KEY"),
    }
}
