//! Prism Core - Shared library for multi-provider LLM dispatch
//!
//! This crate provides the core functionality for the Prism comparator:
//! - A static model registry mapping display names to provider wire formats
//! - Request builders and response parsers per provider family
//! - A retrying invoker with throttle-aware backoff and fallback responses
//! - Approximate token and cost estimation

pub mod client;
pub mod compare;
pub mod constants;
pub mod cost;
pub mod error;
pub mod fallback;
pub mod format;
pub mod models;
pub mod providers;
pub mod retry;

// Re-exports for convenience
pub use client::{AzureDeployment, BedrockConfig, Credentials, LlmClient};
pub use compare::{compare_models, query_model, QueryRequest, QueryResult};
pub use error::{InvokeError, QueryError};
pub use models::{ModelDescriptor, ModelRegistry};
pub use providers::ProviderId;
