//! Template Table Module
//!
//! Static email body templates keyed by (tone, length).

// == Tone ==
/// Stylistic register of the generated email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Professional,
    Friendly,
    Formal,
    Persuasive,
}

impl Tone {
    /// Parses a wire-format tone value.
    ///
    /// Returns None for values outside the template table; callers fall back
    /// to the default template rather than failing.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "professional" => Some(Tone::Professional),
            "friendly" => Some(Tone::Friendly),
            "formal" => Some(Tone::Formal),
            "persuasive" => Some(Tone::Persuasive),
            _ => None,
        }
    }
}

// == Length ==
/// Target size category of the generated email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Length {
    /// Parses a wire-format length value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "short" => Some(Length::Short),
            "medium" => Some(Length::Medium),
            "long" => Some(Length::Long),
            _ => None,
        }
    }
}

// == Template Lookup ==
/// Returns the template for a (tone, length) pair.
///
/// Templates contain the `{recipient}`, `{body}` and `{sender}` placeholder
/// tokens. The formal templates address "Dear Sir or Madam" directly and
/// carry no `{recipient}` token.
pub fn template_for(tone: Tone, length: Length) -> &'static str {
    match (tone, length) {
        (Tone::Professional, Length::Short) => {
            "Dear {recipient},\n\n{body}\n\nBest regards,\n{sender}"
        }
        (Tone::Professional, Length::Medium) => {
            "Dear {recipient},\n\n{body}\n\nPlease do not hesitate to contact me if you have any questions.\n\nBest regards,\n{sender}"
        }
        (Tone::Professional, Length::Long) => {
            "Dear {recipient},\n\n{body}\n\nPlease do not hesitate to contact me if you have any questions or need further details.\n\nThank you for your attention.\n\nBest regards,\n{sender}"
        }
        (Tone::Friendly, Length::Short) => {
            "Hi {recipient},\n\n{body}\n\nTalk soon,\n{sender}"
        }
        (Tone::Friendly, Length::Medium) => {
            "Hi {recipient},\n\n{body}\n\nLet me know if you have any questions.\n\nTalk soon,\n{sender}"
        }
        (Tone::Friendly, Length::Long) => {
            "Hi {recipient},\n\n{body}\n\nLet me know if you have any questions or need more information.\n\nI would be happy to talk it through with you.\n\nTalk soon,\n{sender}"
        }
        (Tone::Formal, Length::Short) => {
            "Dear Sir or Madam,\n\n{body}\n\nYours faithfully,\n{sender}"
        }
        (Tone::Formal, Length::Medium) => {
            "Dear Sir or Madam,\n\n{body}\n\nI remain at your disposal for any further information.\n\nYours faithfully,\n{sender}"
        }
        (Tone::Formal, Length::Long) => {
            "Dear Sir or Madam,\n\n{body}\n\nI remain at your disposal for any further information or clarification.\n\nAwaiting your reply, I thank you for your consideration.\n\nYours faithfully,\n{sender}"
        }
        (Tone::Persuasive, Length::Short) => {
            "Dear {recipient},\n\n{body}\n\nThank you for your attention.\n\nBest regards,\n{sender}"
        }
        (Tone::Persuasive, Length::Medium) => {
            "Dear {recipient},\n\n{body}\n\nI would welcome the opportunity to discuss this with you in more detail.\n\nBest regards,\n{sender}"
        }
        (Tone::Persuasive, Length::Long) => {
            "Dear {recipient},\n\n{body}\n\nI would welcome the opportunity to discuss this with you in more detail and explore what we could achieve together.\n\nPlease do not hesitate to contact me with any questions.\n\nBest regards,\n{sender}"
        }
    }
}
