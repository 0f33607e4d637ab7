//! Sentence generation through an OpenAI-compatible chat-completion API.

mod client;
pub mod prompt;
mod types;

pub use client::{clean_sentence, GenerationError, SentenceClient};
pub use types::*;

/// Shown when the threshold is reached without a configured API key.
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "Clé API manquante. Lancez `motamot key set` pour configurer votre clé Groq.";

/// Shown for any generation failure that has no better description.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Erreur: Impossible de générer la phrase. Veuillez réessayer.";
