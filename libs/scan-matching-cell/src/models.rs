use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

/// Client record as held by the client store. The matcher only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ClientRecord {
    pub fn new(id: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            id_number: None,
            full_name: None,
            email: None,
            phone: None,
        }
    }

    pub fn with_id_number(mut self, id_number: &str) -> Self {
        self.id_number = Some(id_number.to_string());
        self
    }

    /// `firstName lastName`, trimmed when either part is missing.
    pub fn joined_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Name to show for this client: stored full name, then first and last
    /// name, then email, then the record id.
    pub fn display_name(&self) -> String {
        let stored = self.full_name.as_deref().map(str::trim).filter(|name| !name.is_empty());
        if let Some(name) = stored {
            return name.to_string();
        }

        let joined = self.joined_name();
        if !joined.is_empty() {
            return joined;
        }

        match self.email.as_deref().map(str::trim).filter(|email| !email.is_empty()) {
            Some(email) => email.to_string(),
            None => self.id.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMethod {
    /// National ID number matched a single record exactly
    ExactId,
    Fuzzy,
}

/// Ranking entry for one candidate within a single matching call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub client_id: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientMatch<'a> {
    pub client: &'a ClientRecord,
    pub method: MatchMethod,
    /// `None` when found through the exact ID lookup
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanMatchRequest {
    pub identifier: String,
    #[serde(default)]
    pub candidates: Vec<ClientRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Scan identifier must not be empty")]
    EmptyIdentifier,

    #[error("Invalid match policy: {0}")]
    InvalidPolicy(String),
}

impl From<MatchError> for AppError {
    fn from(error: MatchError) -> Self {
        match error {
            MatchError::EmptyIdentifier => AppError::ValidationError(error.to_string()),
            MatchError::InvalidPolicy(_) => AppError::Internal(error.to_string()),
        }
    }
}
