//! Core LLM client
//!
//! Performs the blocking network call for each provider family and
//! classifies failures so the retry layer never inspects provider-specific
//! codes.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use super::config::{
    azure_chat_url, bedrock_invoke_url, Credentials, ANTHROPIC_API_VERSION, ANTHROPIC_MESSAGES_URL,
};
use crate::constants;
use crate::error::InvokeError;
use crate::models::ModelDescriptor;
use crate::providers::{AuthHeader, ProviderId};

/// HTTP client for all provider families
pub struct LlmClient {
    http: Client,
    credentials: Credentials,
}

impl LlmClient {
    /// Create the shared HTTP client with connect and request timeouts
    fn create_http_client() -> Client {
        Client::builder()
            .user_agent(constants::http::USER_AGENT)
            .connect_timeout(constants::http::CONNECT_TIMEOUT)
            .timeout(constants::http::REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client: {}. Using default client.", e);
                Client::new()
            })
    }

    /// Create a new client over a read-only credential set
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: Self::create_http_client(),
            credentials,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Apply the provider's authentication style to a request
    fn apply_auth(
        request: reqwest::RequestBuilder,
        auth: AuthHeader,
        api_key: &str,
    ) -> reqwest::RequestBuilder {
        match auth {
            AuthHeader::Bearer => request.header("authorization", format!("Bearer {api_key}")),
            AuthHeader::XApiKey => request.header("x-api-key", api_key),
            AuthHeader::ApiKey => request.header("api-key", api_key),
        }
    }

    /// Build the authenticated request for one model
    ///
    /// Fails with `MissingCredentials` when the resolved provider has no
    /// credential slot. The registry and the credential set being out of
    /// sync is an internal invariant violation, so it is logged at error
    /// level and never retried.
    fn build_request(
        &self,
        descriptor: &ModelDescriptor,
    ) -> Result<reqwest::RequestBuilder, InvokeError> {
        let provider = descriptor.provider;
        let missing = || {
            error!(
                model = %descriptor.name,
                %provider,
                "credential set does not cover resolved provider"
            );
            InvokeError::MissingCredentials(provider)
        };

        let request = match provider {
            ProviderId::BedrockAnthropic | ProviderId::BedrockMistral => {
                let bedrock = self.credentials.bedrock.as_ref().ok_or_else(missing)?;
                let url = bedrock_invoke_url(&bedrock.region, &descriptor.wire_id);
                Self::apply_auth(
                    self.http.post(url).header("accept", "application/json"),
                    provider.auth_header(),
                    &bedrock.api_key,
                )
            }
            ProviderId::AzureOpenAi => {
                let deployment = self
                    .credentials
                    .azure
                    .get(&descriptor.name)
                    .ok_or_else(missing)?;
                Self::apply_auth(
                    self.http.post(azure_chat_url(deployment)),
                    provider.auth_header(),
                    &deployment.api_key,
                )
            }
            ProviderId::DirectAnthropic => {
                let api_key = self
                    .credentials
                    .anthropic_api_key
                    .as_deref()
                    .ok_or_else(missing)?;
                Self::apply_auth(
                    self.http
                        .post(ANTHROPIC_MESSAGES_URL)
                        .header("anthropic-version", ANTHROPIC_API_VERSION),
                    provider.auth_header(),
                    api_key,
                )
            }
        };

        Ok(request.header("content-type", "application/json"))
    }

    /// Invoke one model with a prepared request body, returning the raw
    /// response bytes or a classified failure
    pub async fn invoke(
        &self,
        descriptor: &ModelDescriptor,
        body: &Value,
    ) -> Result<Vec<u8>, InvokeError> {
        let request = self.build_request(descriptor)?;
        debug!(model = %descriptor.name, provider = %descriptor.provider, "invoking model");

        let response = request.json(body).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.bytes().await?.to_vec());
        }

        let message = response.text().await.unwrap_or_default();
        error!(
            model = %descriptor.name,
            status = status.as_u16(),
            "provider returned error: {}",
            message
        );
        Err(InvokeError::from_status(status.as_u16(), message))
    }
}
