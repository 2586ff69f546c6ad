//! Template Resolver Module
//!
//! Deterministically produces an email body string from tone, length and
//! context. Total over its inputs: unrecognized tone or length values select
//! the default template instead of failing.

use crate::generator::{
    template_for, Length, Tone, BODY_PLACEHOLDER, DEFAULT_RECIPIENT, DEFAULT_SENDER,
    RECIPIENT_PLACEHOLDER, SENDER_PLACEHOLDER,
};

// == Resolve ==
/// Resolves a (tone, length, context) triple into a finished email body.
///
/// The (tone, length) pair selects a template from the static table; if
/// either value is unrecognized the professional/medium template is used.
/// The context text is embedded verbatim into a fixed body sentence.
///
/// Each placeholder is substituted at its first occurrence only. A template
/// that repeats a token keeps the later occurrences verbatim.
pub fn resolve(tone: &str, length: &str, context: &str) -> String {
    let template = match (Tone::parse(tone), Length::parse(length)) {
        (Some(tone), Some(length)) => template_for(tone, length),
        _ => template_for(Tone::Professional, Length::Medium),
    };

    let body = derive_body(context);

    template
        .replacen(RECIPIENT_PLACEHOLDER, DEFAULT_RECIPIENT, 1)
        .replacen(BODY_PLACEHOLDER, &body, 1)
        .replacen(SENDER_PLACEHOLDER, DEFAULT_SENDER, 1)
}

// == Body Derivation ==
/// Builds the body sentence around the literal context text.
///
/// No summarization or language adaptation happens here; the context is
/// quoted as-is.
fn derive_body(context: &str) -> String {
    format!(
        "Regarding your request concerning \"{}\", I would like to propose the following.",
        context
    )
}
