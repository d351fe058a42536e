//! Mistral-on-Bedrock completion format handler
//!
//! Mixtral and Pixtral take a single templated prompt string instead of a
//! message list.

use serde_json::Value;

use super::{instructed_prompt, RequestFormat, RequestOptions};

/// Completion-style format with the Mistral instruction delimiters
pub struct MistralInstructFormat;

impl MistralInstructFormat {
    pub fn new() -> Self {
        Self
    }

    /// Wrap text in the fixed instruction-delimiter template
    fn wrap(text: &str) -> String {
        format!("<s>[INST] {text} [/INST]")
    }
}

impl Default for MistralInstructFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestFormat for MistralInstructFormat {
    fn build_request_body(&self, _wire_id: &str, prompt: &str, options: &RequestOptions) -> Value {
        let text = instructed_prompt(prompt, options);
        serde_json::json!({
            "prompt": Self::wrap(&text),
            "max_tokens": options.max_tokens,
            "temperature": options.temperature,
        })
    }
}
