//! Anthropic Messages API format handlers
//!
//! Two variants of the same chat shape: Bedrock carries the model id in the
//! invoke URL and pins `anthropic_version`, while the direct API takes the
//! model at the top level of the body.

use serde_json::Value;

use super::{instructed_prompt, RequestFormat, RequestOptions};

/// Bedrock version pin for the Anthropic Messages body
const BEDROCK_ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Anthropic-on-Bedrock format handler
///
/// Single user turn with typed content blocks:
/// `{"role": "user", "content": [{"type": "text", "text": ...}]}`
pub struct AnthropicChatFormat;

impl AnthropicChatFormat {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnthropicChatFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestFormat for AnthropicChatFormat {
    fn build_request_body(&self, _wire_id: &str, prompt: &str, options: &RequestOptions) -> Value {
        let text = instructed_prompt(prompt, options);
        serde_json::json!({
            "anthropic_version": BEDROCK_ANTHROPIC_VERSION,
            "max_tokens": options.max_tokens,
            "temperature": options.temperature,
            "messages": [{
                "role": "user",
                "content": [{
                    "type": "text",
                    "text": text
                }]
            }]
        })
    }
}

/// Direct Anthropic Messages API format handler
///
/// Same chat shape, but the model travels in the body and the user turn
/// carries a plain string.
pub struct DirectAnthropicFormat;

impl DirectAnthropicFormat {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DirectAnthropicFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestFormat for DirectAnthropicFormat {
    fn build_request_body(&self, wire_id: &str, prompt: &str, options: &RequestOptions) -> Value {
        let text = instructed_prompt(prompt, options);
        serde_json::json!({
            "model": wire_id,
            "max_tokens": options.max_tokens,
            "temperature": options.temperature,
            "messages": [{
                "role": "user",
                "content": text
            }]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_messages(body: &Value) -> Vec<&Value> {
        body["messages"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|m| m["role"] == "user")
            .collect()
    }

    #[test]
    fn test_bedrock_body_has_one_user_turn_with_verbatim_prompt() {
        let body = AnthropicChatFormat::new().build_request_body(
            "eu.anthropic.claude-3-haiku-20240307-v1:0",
            "what is a burndown chart?",
            &RequestOptions::default(),
        );

        let users = user_messages(&body);
        assert_eq!(users.len(), 1);
        let text = users[0]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("what is a burndown chart?"));
        assert_eq!(body["anthropic_version"], BEDROCK_ANTHROPIC_VERSION);
        assert_eq!(body["max_tokens"], 1000);
        // Bedrock takes the model in the URL, never in the body
        assert!(body.get("model").is_none());
    }

    #[test]
    fn test_direct_body_carries_model_and_plain_content() {
        let body = DirectAnthropicFormat::new().build_request_body(
            "claude-3-haiku-20240307",
            "hello",
            &RequestOptions::bare(),
        );

        assert_eq!(body["model"], "claude-3-haiku-20240307");
        let users = user_messages(&body);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["content"], "hello");
    }

    #[test]
    fn test_serialized_body_embeds_prompt_verbatim() {
        let body = AnthropicChatFormat::new().build_request_body(
            "eu.anthropic.claude-3-sonnet-20240229-v1:0",
            "compare Scrum and Kanban",
            &RequestOptions::default(),
        );
        let serialized = body.to_string();
        assert!(serialized.contains("compare Scrum and Kanban"));
    }
}
