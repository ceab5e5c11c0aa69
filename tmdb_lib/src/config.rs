//! Connection settings resolved from explicit values with environment fallback.

use std::fmt;

use tmdb_api::ClientConfig;

use crate::error::FavoritesError;

/// API URL used when none is configured.
pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";

pub const ENV_API_URL: &str = "TMDB_API";
pub const ENV_API_KEY: &str = "TMDB_API_KEY";
pub const ENV_USERNAME: &str = "TMDB_USERNAME";
pub const ENV_PASSWORD: &str = "TMDB_PASSWORD";
pub const ENV_ACCOUNT_ID: &str = "TMDB_ACCOUNT_ID";

/// Settings for one run. Any field left unset is filled from the
/// environment by [`Settings::with_env_fallback`].
#[derive(Clone, Default)]
pub struct Settings {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub account_id: Option<String>,
}

impl Settings {
    /// Settings taken entirely from the process environment.
    pub fn from_env() -> Self {
        Self::default().with_env_fallback()
    }

    /// Fills unset or empty fields from the process environment.
    pub fn with_env_fallback(self) -> Self {
        self.with_fallback(|name| std::env::var(name).ok())
    }

    /// Fills unset or empty fields using `lookup`, which maps an environment
    /// variable name to its value.
    pub fn with_fallback<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |explicit: Option<String>, name: &str| {
            explicit
                .filter(|v| !v.is_empty())
                .or_else(|| lookup(name).filter(|v| !v.is_empty()))
        };
        Self {
            api_url: pick(self.api_url, ENV_API_URL),
            api_key: pick(self.api_key, ENV_API_KEY),
            username: pick(self.username, ENV_USERNAME),
            password: pick(self.password, ENV_PASSWORD),
            account_id: pick(self.account_id, ENV_ACCOUNT_ID),
        }
    }

    /// The account id, or an error naming the variable that would supply it.
    pub fn require_account_id(&self) -> Result<&str, FavoritesError> {
        self.account_id
            .as_deref()
            .ok_or_else(|| FavoritesError::MissingSetting(ENV_ACCOUNT_ID.to_string()))
    }

    /// Builds the client configuration, defaulting the API URL.
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self
                .api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_key: self.api_key.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            account_id: self.account_id.clone(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Settings")
            .field("api_url", &self.api_url)
            .field("api_key", &redact(&self.api_key))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("account_id", &self.account_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn explicit_values_win_over_environment() {
        let vars = env(&[(ENV_USERNAME, "from-env"), (ENV_API_KEY, "env-key")]);
        let settings = Settings {
            username: Some("explicit".to_string()),
            ..Settings::default()
        }
        .with_fallback(|name| vars.get(name).cloned());

        assert_eq!(settings.username.as_deref(), Some("explicit"));
        assert_eq!(settings.api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn empty_explicit_value_falls_back() {
        let vars = env(&[(ENV_PASSWORD, "pw")]);
        let settings = Settings {
            password: Some(String::new()),
            ..Settings::default()
        }
        .with_fallback(|name| vars.get(name).cloned());
        assert_eq!(settings.password.as_deref(), Some("pw"));
    }

    #[test]
    fn empty_environment_value_counts_as_unset() {
        let vars = env(&[(ENV_ACCOUNT_ID, "")]);
        let settings = Settings::default().with_fallback(|name| vars.get(name).cloned());
        assert_eq!(settings.account_id, None);
        assert!(matches!(
            settings.require_account_id(),
            Err(FavoritesError::MissingSetting(_))
        ));
    }

    #[test]
    fn api_url_defaults_to_production() {
        let config = Settings::default().to_client_config();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn env_api_url_is_used() {
        let vars = env(&[(ENV_API_URL, "https://api.themoviedb.org/4")]);
        let settings = Settings::default().with_fallback(|name| vars.get(name).cloned());
        assert_eq!(
            settings.to_client_config().api_url,
            "https://api.themoviedb.org/4"
        );
    }

    #[test]
    fn debug_hides_secrets() {
        let settings = Settings {
            api_key: Some("k3y".to_string()),
            password: Some("pa55".to_string()),
            ..Settings::default()
        };
        let printed = format!("{:?}", settings);
        assert!(!printed.contains("k3y"));
        assert!(!printed.contains("pa55"));
    }
}
