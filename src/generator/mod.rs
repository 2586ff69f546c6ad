//! Generator Module
//!
//! Template-based email body generation. A static table maps (tone, length)
//! to a parameterized template; the resolver fills in the placeholders.

mod resolver;
mod templates;

// Re-export public types
pub use resolver::resolve;
pub use templates::{template_for, Length, Tone};

// == Public Constants ==
/// Placeholder token for the recipient name
pub const RECIPIENT_PLACEHOLDER: &str = "{recipient}";

/// Placeholder token for the derived body sentence
pub const BODY_PLACEHOLDER: &str = "{body}";

/// Placeholder token for the sender signature
pub const SENDER_PLACEHOLDER: &str = "{sender}";

/// Generic recipient substituted into every template
pub const DEFAULT_RECIPIENT: &str = "Recipient";

/// Generic sender signature substituted into every template
pub const DEFAULT_SENDER: &str = "Your name";
