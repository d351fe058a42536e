//! Response text extraction
//!
//! Pulls plain text out of provider-specific response payloads. Extraction
//! is total: any shape mismatch falls back to the raw decoded bytes so a
//! provider-side format change degrades the output instead of failing the
//! request.

use serde_json::Value;
use tracing::debug;

use crate::providers::ProviderId;

/// Extract plain text from a raw provider response
///
/// Never fails. Priority per provider: the documented response key, a
/// known alternate key where model variants differ, then the raw decoded
/// text as-is.
pub fn extract_text(provider: ProviderId, raw: &[u8]) -> String {
    let raw_text = String::from_utf8_lossy(raw);

    let Ok(json) = serde_json::from_str::<Value>(&raw_text) else {
        debug!(%provider, "response is not JSON, passing raw text through");
        return raw_text.trim().to_string();
    };

    let text = match provider {
        ProviderId::BedrockAnthropic | ProviderId::DirectAnthropic => anthropic_text(&json),
        ProviderId::BedrockMistral => mistral_text(&json),
        ProviderId::AzureOpenAi => openai_chat_text(&json),
    };

    match text {
        Some(text) => text.trim().to_string(),
        None => {
            debug!(%provider, "unrecognised response shape, passing raw text through");
            raw_text.trim().to_string()
        }
    }
}

/// Anthropic Messages shape: concatenate the `text` of every content block
fn anthropic_text(json: &Value) -> Option<String> {
    let blocks = json.get("content")?.as_array()?;
    Some(
        blocks
            .iter()
            .filter_map(|block| block.get("text").and_then(|t| t.as_str()))
            .collect::<Vec<_>>()
            .join(""),
    )
}

/// Mistral completion shape: `outputs[0].text`, with the chat-style
/// `choices[0].message.content` as the variant fallback
fn mistral_text(json: &Value) -> Option<String> {
    if let Some(text) = json
        .get("outputs")
        .and_then(|o| o.as_array())
        .and_then(|arr| arr.first())
        .and_then(|out| out.get("text"))
        .and_then(|t| t.as_str())
    {
        return Some(text.to_string());
    }
    openai_chat_text(json)
}

/// OpenAI chat shape: `choices[0].message.content`
fn openai_chat_text(json: &Value) -> Option<String> {
    json.get("choices")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|msg| msg.get("content"))
        .and_then(|t| t.as_str())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anthropic_blocks_are_concatenated_in_order() {
        let raw = br#"{"content":[{"type":"text","text":"Hello"},{"type":"text","text":" world"}]}"#;
        assert_eq!(
            extract_text(ProviderId::BedrockAnthropic, raw),
            "Hello world"
        );
    }

    #[test]
    fn test_mistral_outputs_shape() {
        let raw = br#"{"outputs":[{"text":"pong"}]}"#;
        assert_eq!(extract_text(ProviderId::BedrockMistral, raw), "pong");
    }

    #[test]
    fn test_mistral_choices_variant() {
        let raw = br#"{"choices":[{"message":{"content":"variant answer"}}]}"#;
        assert_eq!(
            extract_text(ProviderId::BedrockMistral, raw),
            "variant answer"
        );
    }

    #[test]
    fn test_azure_chat_shape() {
        let raw = br#"{"choices":[{"message":{"content":"azure says hi"}}]}"#;
        assert_eq!(extract_text(ProviderId::AzureOpenAi, raw), "azure says hi");
    }

    #[test]
    fn test_non_json_passes_through() {
        let raw = b"plain text, not json";
        assert_eq!(
            extract_text(ProviderId::BedrockAnthropic, raw),
            "plain text, not json"
        );
    }

    #[test]
    fn test_wrong_shape_passes_raw_through() {
        let raw = br#"{"unexpected":"shape"}"#;
        assert_eq!(
            extract_text(ProviderId::BedrockMistral, raw),
            r#"{"unexpected":"shape"}"#
        );
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        for provider in ProviderId::all() {
            assert_eq!(extract_text(*provider, b""), "");
        }
    }

    #[test]
    fn test_invalid_utf8_never_panics() {
        let raw = [0xff, 0xfe, 0x80, 0x81];
        for provider in ProviderId::all() {
            let _ = extract_text(*provider, &raw);
        }
    }

    #[test]
    fn test_result_is_trimmed() {
        let raw = br#"{"content":[{"type":"text","text":"  padded  "}]}"#;
        assert_eq!(extract_text(ProviderId::DirectAnthropic, raw), "padded");
    }
}
