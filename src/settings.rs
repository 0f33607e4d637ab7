//! Credential storage for the sentence-generation service.
//!
//! The key lives in the settings database. `MOTAMOT_GROQ_API_KEY` takes
//! precedence when set, so a deployment can inject it without writing to disk.

use std::sync::Arc;

use anyhow::{bail, Result};

use crate::db::Database;
use crate::models::{CredentialSource, CredentialStatus};

pub const API_KEY_ENV: &str = "MOTAMOT_GROQ_API_KEY";

const CREDENTIAL_KEY: &str = "groq_api_key";

/// Get/set/clear access to the stored credential.
pub trait CredentialStore: Send + Sync {
    fn credential(&self) -> Result<Option<String>>;
    fn set_credential(&self, value: &str) -> Result<()>;
    /// Returns `false` when there was nothing to clear.
    fn clear_credential(&self) -> Result<bool>;
}

impl CredentialStore for Database {
    fn credential(&self) -> Result<Option<String>> {
        Ok(self
            .get_setting(CREDENTIAL_KEY)?
            .filter(|v| !v.trim().is_empty()))
    }

    fn set_credential(&self, value: &str) -> Result<()> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            bail!("Cannot store an empty API key");
        }
        self.set_setting(CREDENTIAL_KEY, trimmed)
    }

    fn clear_credential(&self) -> Result<bool> {
        self.delete_setting(CREDENTIAL_KEY)
    }
}

/// The credential store used by the app: environment override over a durable store.
#[derive(Clone)]
pub struct Settings {
    store: Arc<dyn CredentialStore>,
    env_override: Option<String>,
}

impl Settings {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            env_override: load_env_api_key(),
        }
    }

    /// A store that ignores the environment.
    pub fn without_env(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            env_override: None,
        }
    }

    pub fn resolve(&self) -> Result<Option<(String, CredentialSource)>> {
        if let Some(key) = &self.env_override {
            return Ok(Some((key.clone(), CredentialSource::Environment)));
        }
        Ok(self
            .store
            .credential()?
            .map(|key| (key, CredentialSource::Database)))
    }

    pub fn status(&self) -> Result<CredentialStatus> {
        let source = self.resolve()?.map(|(_, source)| source);
        Ok(CredentialStatus {
            configured: source.is_some(),
            source,
        })
    }
}

impl CredentialStore for Settings {
    fn credential(&self) -> Result<Option<String>> {
        Ok(self.resolve()?.map(|(key, _)| key))
    }

    fn set_credential(&self, value: &str) -> Result<()> {
        self.store.set_credential(value)
    }

    fn clear_credential(&self) -> Result<bool> {
        self.store.clear_credential()
    }
}

fn load_env_api_key() -> Option<String> {
    match std::env::var(API_KEY_ENV) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}
