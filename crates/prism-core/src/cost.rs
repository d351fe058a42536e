//! Approximate token and cost estimation
//!
//! Deliberately crude: tokens are approximated from whitespace word counts,
//! not a tokenizer. Good enough for the comparison summary, never for
//! billing.

use crate::constants;
use crate::models::ModelRegistry;

/// Approximate token count for a piece of text, always at least 1
fn approx_tokens(text: &str) -> f64 {
    let words = text.split_whitespace().count() as f64;
    (words * constants::ai::TOKENS_PER_WORD).max(1.0)
}

/// Estimate total tokens and USD cost for one exchange
///
/// Input and output are estimated independently and summed. The cost is
/// rounded to 6 decimal places; an unknown model name yields 0.0 rather
/// than failing.
pub fn estimate(
    registry: &ModelRegistry,
    model_name: &str,
    input_text: &str,
    output_text: &str,
) -> (u64, f64) {
    let input_tokens = approx_tokens(input_text);
    let output_tokens = approx_tokens(output_text);
    let tokens = (input_tokens + output_tokens) as u64;

    let cost = match registry.get(model_name) {
        Some(model) => {
            let raw = (input_tokens * model.cost_per_k_input
                + output_tokens * model.cost_per_k_output)
                / 1000.0;
            round6(raw)
        }
        None => 0.0,
    };

    (tokens, cost)
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model_yields_positive_estimate() {
        // word-count approximation, not a tokenizer-accurate count
        let registry = ModelRegistry::builtin();
        let (tokens, cost) = estimate(&registry, "Claude 3 Sonnet", "hello world", "hi");
        assert!(tokens > 0);
        assert!(cost > 0.0);
        assert_eq!(cost, round6(cost));
    }

    #[test]
    fn test_unknown_model_costs_nothing() {
        let registry = ModelRegistry::builtin();
        let (tokens, cost) = estimate(&registry, "Unknown Model X", "a", "b");
        assert!(tokens > 0);
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_empty_text_counts_one_token_per_side() {
        let registry = ModelRegistry::builtin();
        let (tokens, _) = estimate(&registry, "Claude 3 Haiku", "", "");
        assert_eq!(tokens, 2);
    }

    #[test]
    fn test_cost_matches_pricing_table() {
        let registry = ModelRegistry::builtin();
        // 2 words in, 1 word out -> 2.6 and 1.3 approximate tokens
        let (tokens, cost) = estimate(&registry, "Claude 3 Sonnet", "hello world", "hi");
        assert_eq!(tokens, 3);
        let expected = round6((2.6 * 0.003 + 1.3 * 0.015) / 1000.0);
        assert!((cost - expected).abs() < 1e-12);
    }
}
