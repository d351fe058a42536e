//! Model metadata and registry
//!
//! Central mapping from human-readable display names to provider wire
//! identifiers and pricing. Built once at startup and injected; callers
//! never need to know which wire format backs a given name.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::QueryError;
use crate::providers::ProviderId;

/// Immutable model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Human-readable display name (unique across the registry)
    pub name: String,
    /// Which provider family serves this model
    pub provider: ProviderId,
    /// Provider-specific model identifier. Azure additionally resolves a
    /// deployment name, API version, and endpoint per display name from
    /// the credential set.
    pub wire_id: String,
    /// Input price in USD per 1000 tokens
    pub cost_per_k_input: f64,
    /// Output price in USD per 1000 tokens
    pub cost_per_k_output: f64,
}

impl ModelDescriptor {
    pub fn new(
        name: &str,
        provider: ProviderId,
        wire_id: &str,
        cost_per_k_input: f64,
        cost_per_k_output: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            provider,
            wire_id: wire_id.to_string(),
            cost_per_k_input,
            cost_per_k_output,
        }
    }
}

/// Lazily initialized built-in model table
static BUILTIN_MODELS: LazyLock<Vec<ModelDescriptor>> = LazyLock::new(|| {
    vec![
        ModelDescriptor::new(
            "Mixtral 8x7B Instruct",
            ProviderId::BedrockMistral,
            "mistral.mixtral-8x7b-instruct-v0:1",
            0.0007,
            0.0007,
        ),
        ModelDescriptor::new(
            "Claude 3 Sonnet",
            ProviderId::BedrockAnthropic,
            "eu.anthropic.claude-3-sonnet-20240229-v1:0",
            0.003,
            0.015,
        ),
        ModelDescriptor::new(
            "Claude 3 Haiku",
            ProviderId::BedrockAnthropic,
            "eu.anthropic.claude-3-haiku-20240307-v1:0",
            0.00025,
            0.00125,
        ),
        ModelDescriptor::new(
            "Claude 3.7 Sonnet",
            ProviderId::BedrockAnthropic,
            "eu.anthropic.claude-3-7-sonnet-20250219-v1:0",
            0.003,
            0.015,
        ),
        ModelDescriptor::new(
            "Pixtral Large",
            ProviderId::BedrockMistral,
            "eu.mistral.pixtral-large-2502-v1:0",
            0.002,
            0.006,
        ),
        ModelDescriptor::new(
            "GPT-4o (Azure)",
            ProviderId::AzureOpenAi,
            "gpt-4o",
            0.005,
            0.015,
        ),
        ModelDescriptor::new(
            "GPT-4o Mini (Azure)",
            ProviderId::AzureOpenAi,
            "gpt-4o-mini",
            0.00015,
            0.0006,
        ),
        ModelDescriptor::new(
            "Claude 3 Haiku (Direct)",
            ProviderId::DirectAnthropic,
            "claude-3-haiku-20240307",
            0.00025,
            0.00125,
        ),
    ]
});

/// Get the built-in model table (cached, no allocation)
pub fn builtin_models() -> &'static [ModelDescriptor] {
    &BUILTIN_MODELS
}

/// Immutable display-name to descriptor map
///
/// Constructed once at process start and shared read-only between
/// concurrent queries.
pub struct ModelRegistry {
    models: HashMap<String, ModelDescriptor>,
}

impl ModelRegistry {
    /// Build the registry from the built-in model table
    pub fn builtin() -> Self {
        Self::from_models(builtin_models().to_vec())
    }

    /// Build a registry from an explicit model list.
    /// Display names must be unique; a duplicate keeps the first entry.
    pub fn from_models(models: Vec<ModelDescriptor>) -> Self {
        let mut map = HashMap::with_capacity(models.len());
        for model in models {
            map.entry(model.name.clone()).or_insert(model);
        }
        Self { models: map }
    }

    /// Look up a model without constructing an error
    pub fn get(&self, name: &str) -> Option<&ModelDescriptor> {
        self.models.get(name)
    }

    /// Resolve a display name, failing with the list of known names
    pub fn resolve(&self, name: &str) -> Result<&ModelDescriptor, QueryError> {
        self.get(name).ok_or_else(|| QueryError::UnknownModel {
            model: name.to_string(),
            available: self.names(),
        })
    }

    /// Sorted display names of every registered model
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.models.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
