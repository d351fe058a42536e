//! Azure OpenAI chat format handler
//!
//! Standard chat/completions message list. The deployment name, API
//! version, and endpoint are resolved per model by the client; the body
//! itself never names the model.

use serde_json::Value;

use super::{RequestFormat, RequestOptions};

/// Azure OpenAI chat/completions format handler
pub struct AzureChatFormat;

impl AzureChatFormat {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AzureChatFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestFormat for AzureChatFormat {
    fn build_request_body(&self, _wire_id: &str, prompt: &str, options: &RequestOptions) -> Value {
        let mut messages: Vec<Value> = Vec::with_capacity(2);
        if let Some(preamble) = options.preamble {
            messages.push(serde_json::json!({
                "role": "system",
                "content": preamble
            }));
        }
        messages.push(serde_json::json!({
            "role": "user",
            "content": prompt
        }));

        serde_json::json!({
            "messages": messages,
            "max_tokens": options.max_tokens,
            "temperature": options.temperature,
        })
    }
}
