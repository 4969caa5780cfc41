//! Per-request session input. Built fresh from each form or JSON submission and
//! passed explicitly through the pipeline; nothing here outlives the request.

use std::fmt;

use serde::Deserialize;

use crate::errors::AppError;

/// Form defaults shown before the user types anything.
pub const DEFAULT_CURRENT_ROLE: &str = "K-12 Teacher";
pub const DEFAULT_TARGET_ROLE: &str = "EdTech Architect";

/// The user's generation-service key. Opaque: never logged, never persisted.
#[derive(Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    #[cfg(test)]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// A key of only whitespace can never authorize a call, so it counts as absent.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionInput {
    #[serde(default)]
    pub credential: Credential,
    #[serde(default)]
    pub current_role: String,
    #[serde(default)]
    pub target_role: String,
}

impl SessionInput {
    /// Returns the credential, or `MissingCredential` if none was supplied.
    pub fn credential(&self) -> Result<&Credential, AppError> {
        if self.credential.is_blank() {
            return Err(AppError::MissingCredential);
        }
        Ok(&self.credential)
    }
}
