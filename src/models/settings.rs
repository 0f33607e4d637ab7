use serde::{Deserialize, Serialize};

/// Where the active credential was found.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
    Environment,
    Database,
}

impl CredentialSource {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Environment => "environment variable",
            Self::Database => "local settings database",
        }
    }
}

/// Whether a credential is configured. The key itself is never echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialStatus {
    pub configured: bool,
    pub source: Option<CredentialSource>,
}

/// Input for storing the sentence-generation credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCredentialInput {
    pub api_key: String,
}
