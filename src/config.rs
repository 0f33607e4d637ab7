//! Runtime configuration loaded from environment variables.
//!
//! - `MOTAMOT_GROQ_URL` - Chat-completion base URL (default: Groq's OpenAI-compatible API)
//! - `MOTAMOT_GROQ_MODEL` - Model used for sentence generation
//! - `MOTAMOT_STORAGE_URL` - Object-storage project URL serving the illustrations
//! - `MOTAMOT_STORAGE_BUCKET` - Public bucket holding the illustrations
//! - `MOTAMOT_IMAGE_URL` - Image-generation service used by the offline jobs
//! - `MOTAMOT_DB_PATH` - Settings database (default: platform data directory)
//! - `MOTAMOT_SESSION_TTL_SECS` - Idle lifetime of a click session (default: 1800)

use std::path::PathBuf;
use std::time::Duration;

use crate::session::SESSION_TTL;

pub const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_STORAGE_URL: &str = "https://gvsbrkvrqjlptzlvbaax.supabase.co";
pub const DEFAULT_STORAGE_BUCKET: &str = "images";
pub const DEFAULT_IMAGE_URL: &str = "https://image.pollinations.ai";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub groq_url: String,
    pub groq_model: String,
    pub storage_url: String,
    pub storage_bucket: String,
    pub image_url: String,
    /// `None` means the platform default from [`crate::db::default_path`].
    pub db_path: Option<PathBuf>,
    pub session_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            groq_url: DEFAULT_GROQ_URL.to_string(),
            groq_model: DEFAULT_GROQ_MODEL.to_string(),
            storage_url: DEFAULT_STORAGE_URL.to_string(),
            storage_bucket: DEFAULT_STORAGE_BUCKET.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            db_path: None,
            session_ttl: SESSION_TTL,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            groq_url: env_or("MOTAMOT_GROQ_URL", defaults.groq_url),
            groq_model: env_or("MOTAMOT_GROQ_MODEL", defaults.groq_model),
            storage_url: env_or("MOTAMOT_STORAGE_URL", defaults.storage_url),
            storage_bucket: env_or("MOTAMOT_STORAGE_BUCKET", defaults.storage_bucket),
            image_url: env_or("MOTAMOT_IMAGE_URL", defaults.image_url),
            db_path: std::env::var("MOTAMOT_DB_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            session_ttl: std::env::var("MOTAMOT_SESSION_TTL_SECS")
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_ttl),
        }
    }
}

fn env_or(name: &str, default: String) -> String {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => value.trim_end_matches('/').to_string(),
        _ => default,
    }
}
