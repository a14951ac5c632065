use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Opaque user identifier supplied by the auth collaborator.
///
/// Every per-user file is keyed by this value, so it is restricted to
/// ASCII alphanumerics, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// # Errors
    ///
    /// Returns `ValidationError` if the id is empty or contains characters
    /// that are unsafe in a file name.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::message("user id must not be empty"));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::message(format!(
                "user id '{raw}' may only contain letters, digits, '-' and '_'"
            )));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_ids() {
        assert_eq!(UserId::new("42").unwrap().as_str(), "42");
        assert!(UserId::new("user_a-1").is_ok());
    }

    #[test]
    fn rejects_path_like_ids() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("../etc").is_err());
        assert!(UserId::new("a/b").is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok: UserId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(ok.as_str(), "7");
        assert!(serde_json::from_str::<UserId>("\"a b\"").is_err());
    }
}
