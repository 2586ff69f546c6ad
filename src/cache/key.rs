//! Cache Key Module
//!
//! Canonicalizes the generation-relevant request fields into an exact-match
//! cache key.

use serde::Serialize;

/// Ordered view of the ten generation-relevant fields.
///
/// Field declaration order fixes the serialization order, so two requests
/// produce the same key exactly when every field matches. Floating-point
/// fields compare by their serialized form, not by tolerance. `isAnonymous`
/// is deliberately absent: it is accepted on the wire but never keys the
/// cache.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeyFields<'a> {
    context: &'a str,
    tone: &'a str,
    length: &'a str,
    model: &'a str,
    formality: f64,
    creativity: f64,
    writing_style: &'a str,
    language: &'a str,
    max_tokens: u32,
    temperature: f64,
}

// == Canonical Key ==
/// Serializes the ten key fields, in order, into the canonical cache key.
#[allow(clippy::too_many_arguments)]
pub fn canonical_key(
    context: &str,
    tone: &str,
    length: &str,
    model: &str,
    formality: f64,
    creativity: f64,
    writing_style: &str,
    language: &str,
    max_tokens: u32,
    temperature: f64,
) -> String {
    let fields = KeyFields {
        context,
        tone,
        length,
        model,
        formality,
        creativity,
        writing_style,
        language,
        max_tokens,
        temperature,
    };

    // A flat struct of strings and numbers always serializes
    serde_json::to_string(&fields).expect("cache key serialization cannot fail")
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_key() -> String {
        canonical_key(
            "refund request",
            "friendly",
            "short",
            "openai",
            0.5,
            0.7,
            "direct",
            "en",
            500,
            0.7,
        )
    }

    #[test]
    fn test_key_is_deterministic() {
        assert_eq!(sample_key(), sample_key());
    }

    #[test]
    fn test_key_field_order_is_fixed() {
        let key = sample_key();
        let context_pos = key.find("\"context\"").unwrap();
        let tone_pos = key.find("\"tone\"").unwrap();
        let temperature_pos = key.find("\"temperature\"").unwrap();

        assert!(context_pos < tone_pos);
        assert!(tone_pos < temperature_pos);
    }

    #[test]
    fn test_key_uses_wire_field_names() {
        let key = sample_key();
        assert!(key.contains("\"writingStyle\""));
        assert!(key.contains("\"maxTokens\""));
    }

    #[test]
    fn test_key_differs_when_any_field_changes() {
        let base = sample_key();

        let variants = [
            canonical_key("other", "friendly", "short", "openai", 0.5, 0.7, "direct", "en", 500, 0.7),
            canonical_key("refund request", "formal", "short", "openai", 0.5, 0.7, "direct", "en", 500, 0.7),
            canonical_key("refund request", "friendly", "long", "openai", 0.5, 0.7, "direct", "en", 500, 0.7),
            canonical_key("refund request", "friendly", "short", "ollama", 0.5, 0.7, "direct", "en", 500, 0.7),
            canonical_key("refund request", "friendly", "short", "openai", 0.6, 0.7, "direct", "en", 500, 0.7),
            canonical_key("refund request", "friendly", "short", "openai", 0.5, 0.8, "direct", "en", 500, 0.7),
            canonical_key("refund request", "friendly", "short", "openai", 0.5, 0.7, "narrative", "en", 500, 0.7),
            canonical_key("refund request", "friendly", "short", "openai", 0.5, 0.7, "direct", "fr", 500, 0.7),
            canonical_key("refund request", "friendly", "short", "openai", 0.5, 0.7, "direct", "en", 600, 0.7),
            canonical_key("refund request", "friendly", "short", "openai", 0.5, 0.7, "direct", "en", 500, 0.8),
        ];

        for (i, variant) in variants.iter().enumerate() {
            assert_ne!(&base, variant, "field {} did not affect the key", i);
        }
    }
}
