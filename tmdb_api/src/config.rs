//! Connection settings for the API client.

use std::fmt;

use crate::Error;

/// Origin every configured API URL must start with.
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org";

/// Connection and credential settings for a [`crate::Client`].
///
/// Credentials are optional so that a client can be built for anonymous
/// use; [`crate::Client::login`] refuses to run without all three.
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// Base URL including the API version, e.g. `https://api.themoviedb.org/3`.
    pub api_url: String,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Not used by the client itself; carried for callers that build
    /// account-scoped paths.
    pub account_id: Option<String>,
}

impl ClientConfig {
    /// Creates a config for the given base URL with no credentials.
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    pub fn with_account_id(mut self, account_id: &str) -> Self {
        self.account_id = Some(account_id.to_string());
        self
    }

    /// Checks that `api_url` starts with `origin`.
    pub(crate) fn validate(&self, origin: &str) -> Result<(), Error> {
        if !self.api_url.starts_with(origin) {
            tracing::error!("Rejected api_url '{}'", self.api_url);
            return Err(Error::Generic(format!(
                "Invalid instance api_url value: '{}'. Value must start with {}",
                self.api_url, origin
            )));
        }
        Ok(())
    }
}

/// Returns the value if it is present and not empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &redact(&self.api_key))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("account_id", &self.account_id)
            .finish()
    }
}
