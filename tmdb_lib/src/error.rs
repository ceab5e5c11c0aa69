//! Error types for the caller layer.

use std::fmt;

/// Errors produced by the caller layer, wrapping upstream API errors
/// and adding settings, serialization, and input validation failures.
#[derive(Debug)]
pub enum FavoritesError {
    /// An error from the underlying API client.
    Api(tmdb_api::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// A required setting was given neither explicitly nor in the environment.
    MissingSetting(String),
    /// The account's favorites endpoint answered 404.
    AccountNotFound(String),
}

impl fmt::Display for FavoritesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "{}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::MissingSetting(name) => write!(f, "Missing required setting: {}", name),
            Self::AccountNotFound(id) => write!(f, "Account not found: {}", id),
        }
    }
}

impl std::error::Error for FavoritesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<tmdb_api::Error> for FavoritesError {
    fn from(e: tmdb_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for FavoritesError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn api_error_passes_message_through() {
        let err = FavoritesError::from(tmdb_api::Error::Response {
            status: 500,
            body: "oops".to_string(),
        });
        assert_eq!(err.to_string(), "Unexpected response from TMDB API - 500 oops");
        assert!(err.source().is_some());
    }

    #[test]
    fn missing_setting_names_the_variable() {
        let err = FavoritesError::MissingSetting("TMDB_ACCOUNT_ID".to_string());
        assert!(err.to_string().contains("TMDB_ACCOUNT_ID"));
        assert!(err.source().is_none());
    }
}
