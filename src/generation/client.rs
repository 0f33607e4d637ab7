use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::prompt::{build_prompt, pick_style, SYSTEM_PERSONA};
use super::types::{ChatMessage, ChatRequest, ChatResponse};
use super::{GENERATION_FAILED_MESSAGE, MISSING_CREDENTIAL_MESSAGE};
use crate::config::AppConfig;
use crate::models::VocabularyEntry;

const TEMPERATURE: f32 = 0.6;
const MAX_TOKENS: u32 = 100;

/// Sentence generation errors.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no API key configured")]
    MissingCredential,

    #[error("sentence request failed with status {0}")]
    RequestFailed(StatusCode),

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Parse(String),
}

impl GenerationError {
    /// Text to show the learner in place of the sentence.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential => MISSING_CREDENTIAL_MESSAGE.to_string(),
            Self::RequestFailed(_) => GENERATION_FAILED_MESSAGE.to_string(),
            Self::Network(e) => non_empty_or_generic(e.to_string()),
            Self::Parse(msg) => non_empty_or_generic(msg.clone()),
        }
    }
}

fn non_empty_or_generic(msg: String) -> String {
    if msg.trim().is_empty() {
        GENERATION_FAILED_MESSAGE.to_string()
    } else {
        msg
    }
}

/// HTTP client for the chat-completion endpoint.
///
/// One request per call, never retried.
#[derive(Debug, Clone)]
pub struct SentenceClient {
    base_url: String,
    model: String,
    client: Client,
}

impl SentenceClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.groq_url.clone(), config.groq_model.clone())
    }

    /// Build the request body for a set of words and a humour style.
    pub fn request_body(&self, words: &[VocabularyEntry], humor_style: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PERSONA),
                ChatMessage::user(build_prompt(words, humor_style)),
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    /// Ask the model for a sentence using (some of) `words`.
    pub async fn generate(
        &self,
        words: &[VocabularyEntry],
        credential: Option<&str>,
    ) -> Result<String, GenerationError> {
        let style = pick_style(&mut rand::rng());
        self.generate_with_style(words, credential, style).await
    }

    pub async fn generate_with_style(
        &self,
        words: &[VocabularyEntry],
        credential: Option<&str>,
        humor_style: &str,
    ) -> Result<String, GenerationError> {
        let api_key = credential
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(GenerationError::MissingCredential)?;

        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(words = words.len(), style = humor_style, "Requesting sentence");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&self.request_body(words, humor_style))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Sentence request failed: {}: {}", status, body);
            return Err(GenerationError::RequestFailed(status));
        }

        let body = response.text().await?;
        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| GenerationError::Parse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GenerationError::Parse("No content returned from model".to_string()))?;

        Ok(clean_sentence(&content))
    }
}

/// Trim whitespace, then one surrounding quote character on each side.
pub fn clean_sentence(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix(['"', '\'']).unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(['"', '\'']).unwrap_or(trimmed);
    trimmed.to_string()
}
