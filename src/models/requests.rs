//! Request DTOs for the drafting server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::canonical_key;

/// Request body for the generate operation (POST /generate)
///
/// All fields except `context` carry defaults matching the client's initial
/// form state, so a minimal `{"context": "..."}` body is a valid request.
///
/// Of these fields only `context`, `tone` and `length` influence the
/// generated output; the rest are accepted and cached but inert. Every field
/// except `isAnonymous` participates in the cache key.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Free-text description of what the email is about
    pub context: String,
    /// Stylistic register (professional, friendly, formal, persuasive)
    #[serde(default = "default_tone")]
    pub tone: String,
    /// Target size category (short, medium, long)
    #[serde(default = "default_length")]
    pub length: String,
    /// Model selector (inert)
    #[serde(default = "default_model")]
    pub model: String,
    /// Formality level, 0-1 (inert)
    #[serde(default = "default_formality")]
    pub formality: f64,
    /// Creativity level, 0-1 (inert)
    #[serde(default = "default_creativity")]
    pub creativity: f64,
    /// Anonymous-mode flag; accepted but never keys the cache
    #[serde(default)]
    pub is_anonymous: bool,
    /// Writing style (inert)
    #[serde(default = "default_writing_style")]
    pub writing_style: String,
    /// Output language (inert)
    #[serde(default = "default_language")]
    pub language: String,
    /// Token budget, 100-2000 (inert)
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature, 0-1 (inert)
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_tone() -> String {
    "professional".to_string()
}

fn default_length() -> String {
    "medium".to_string()
}

fn default_model() -> String {
    "openai".to_string()
}

fn default_formality() -> f64 {
    0.5
}

fn default_creativity() -> f64 {
    0.7
}

fn default_writing_style() -> String {
    "direct".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f64 {
    0.7
}

impl GenerateRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.context.trim().is_empty() {
            return Some("Context cannot be empty".to_string());
        }
        None
    }

    /// Returns the canonical cache key for this request.
    ///
    /// Exactly the ten generation-relevant fields participate, in fixed
    /// order; `isAnonymous` does not.
    pub fn cache_key(&self) -> String {
        canonical_key(
            &self.context,
            &self.tone,
            &self.length,
            &self.model,
            self.formality,
            self.creativity,
            &self.writing_style,
            &self.language,
            self.max_tokens,
            self.temperature,
        )
    }
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            context: String::new(),
            tone: default_tone(),
            length: default_length(),
            model: default_model(),
            formality: default_formality(),
            creativity: default_creativity(),
            is_anonymous: false,
            writing_style: default_writing_style(),
            language: default_language(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}
