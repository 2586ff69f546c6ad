//! Cache Entry Module
//!
//! Defines the structure for individual cached generation results.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cache::canonical_key;
use crate::models::GenerateRequest;

// == Cache Entry ==
/// A single cached generation result.
///
/// Owns copies of all key-relevant request fields rather than referencing
/// the request, so the snapshot round-trips without the originating request.
/// Entries are never mutated; they leave the cache only through eviction or
/// an explicit clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    /// Unique entry identifier
    pub id: String,
    /// Free-text context the email was generated from
    pub context: String,
    /// Requested tone
    pub tone: String,
    /// Requested length category
    pub length: String,
    /// Requested model (inert, cached for key fidelity)
    pub model: String,
    /// Formality slider value
    pub formality: f64,
    /// Creativity slider value
    pub creativity: f64,
    /// Requested writing style
    pub writing_style: String,
    /// Requested output language
    pub language: String,
    /// Requested token budget
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f64,
    /// The generated email body
    pub result: String,
    /// Creation timestamp (Unix milliseconds)
    pub timestamp: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry from a request and its generated result.
    ///
    /// Assigns a fresh unique id and the current timestamp.
    pub fn new(request: &GenerateRequest, result: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            context: request.context.clone(),
            tone: request.tone.clone(),
            length: request.length.clone(),
            model: request.model.clone(),
            formality: request.formality,
            creativity: request.creativity,
            writing_style: request.writing_style.clone(),
            language: request.language.clone(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            result,
            timestamp: current_timestamp_ms(),
        }
    }

    // == Key ==
    /// Returns the canonical cache key derived from this entry's fields.
    pub fn key(&self) -> String {
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

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
