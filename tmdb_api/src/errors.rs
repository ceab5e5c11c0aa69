//! Error types for the API client.

/// Errors that can occur when talking to the TMDB API.
///
/// Every variant is terminal: the client never retries on its own.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Transport failure, undecodable response, or invalid configuration.
    #[error("{0}")]
    Generic(String),
    /// Credential exchange failed, or the API answered with HTTP 401.
    /// Carries the message of the underlying cause.
    #[error("{0}")]
    Auth(String),
    /// The API answered with a status outside the operation's accepted set.
    #[error("Unexpected response from TMDB API - {status} {body}")]
    Response { status: u16, body: String },
}

impl Error {
    /// True for authentication failures.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// True for unexpected-status failures.
    pub fn is_response(&self) -> bool {
        matches!(self, Self::Response { .. })
    }

    /// The HTTP status carried by a [`Error::Response`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_error_message_carries_status_and_body() {
        let err = Error::Response {
            status: 500,
            body: r#"{"status_message":"boom"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Unexpected response from TMDB API - 500 {"status_message":"boom"}"#
        );
        assert_eq!(err.status(), Some(500));
        assert!(err.is_response());
        assert!(!err.is_auth());
    }

    #[test]
    fn auth_error_keeps_cause_message() {
        let cause = Error::Response {
            status: 401,
            body: String::new(),
        };
        let err = Error::Auth(cause.to_string());
        assert!(err.is_auth());
        assert!(err.to_string().contains("401"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn generic_error_display() {
        let err = Error::Generic("dns error: failed to lookup address".to_string());
        assert_eq!(err.to_string(), "dns error: failed to lookup address");
    }
}
