//! Username/password login: request token, validation, session.

use std::fmt;

use reqwest::Method;

use crate::{
    config::non_empty,
    types::{NewSessionBody, RequestTokenResponse, SessionResponse, ValidateWithLoginBody},
    Client, Error, Params, Payload,
};

const TOKEN_NEW_PATH: &str = "/authentication/token/new";
const TOKEN_VALIDATE_PATH: &str = "/authentication/token/validate_with_login";
const SESSION_NEW_PATH: &str = "/authentication/session/new";

/// Steps of the login exchange, in order.
#[derive(Debug, Clone, Copy)]
enum LoginStep {
    ObtainToken,
    ValidateToken,
    CreateSession,
}

impl fmt::Display for LoginStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ObtainToken => "obtain request token",
            Self::ValidateToken => "validate request token",
            Self::CreateSession => "create session",
        };
        f.write_str(name)
    }
}

struct Credentials<'a> {
    api_key: &'a str,
    username: &'a str,
    password: &'a str,
}

impl Client {
    /// Establishes a session using the configured credentials.
    ///
    /// Fails with [`Error::Auth`] without touching the network when the API
    /// key, username or password is missing. Otherwise runs the three-step
    /// exchange; any failure along the way is reported as [`Error::Auth`]
    /// carrying the original message, and the client stays unauthenticated.
    /// On success every later request carries `api_key` and `session_id`.
    pub async fn login(&mut self) -> Result<(), Error> {
        self.session_id = None;

        let config = &self.config;
        let creds = match (
            non_empty(&config.api_key),
            non_empty(&config.username),
            non_empty(&config.password),
        ) {
            (Some(api_key), Some(username), Some(password)) => Credentials {
                api_key,
                username,
                password,
            },
            _ => {
                return Err(Error::Auth(
                    "Missing input parameters (one of): api_key, username, password".to_string(),
                ))
            }
        };

        let session_id = match self.establish_session(&creds).await {
            Ok(session_id) => session_id,
            Err((step, e)) => {
                tracing::error!("Login failed at step '{}': {}", step, e);
                return Err(Error::Auth(e.to_string()));
            }
        };

        tracing::info!("Session established for user '{}'", creds.username);
        self.session_id = Some(session_id);
        Ok(())
    }

    async fn establish_session(&self, creds: &Credentials<'_>) -> Result<String, (LoginStep, Error)> {
        let request_token = self
            .request_token(creds)
            .await
            .map_err(|e| (LoginStep::ObtainToken, e))?;
        self.validate_token(creds, &request_token)
            .await
            .map_err(|e| (LoginStep::ValidateToken, e))?;
        self.create_session(creds, &request_token)
            .await
            .map_err(|e| (LoginStep::CreateSession, e))
    }

    async fn request_token(&self, creds: &Credentials<'_>) -> Result<String, Error> {
        let params = Params::new().with("api_key", creds.api_key);
        let resp = self
            .request(Method::GET, TOKEN_NEW_PATH, &params, Payload::Empty, None)
            .await?
            .expect_status(&[200])?;
        let token: RequestTokenResponse = resp.json()?;
        tracing::debug!("Obtained request token");
        Ok(token.request_token)
    }

    async fn validate_token(&self, creds: &Credentials<'_>, request_token: &str) -> Result<(), Error> {
        let params = Params::new().with("api_key", creds.api_key);
        let body = ValidateWithLoginBody {
            username: creds.username,
            password: creds.password,
            request_token,
        };
        self.request(
            Method::POST,
            TOKEN_VALIDATE_PATH,
            &params,
            Payload::json(&body)?,
            None,
        )
        .await?
        .expect_status(&[200])?;
        tracing::debug!("Validated request token");
        Ok(())
    }

    async fn create_session(&self, creds: &Credentials<'_>, request_token: &str) -> Result<String, Error> {
        let params = Params::new().with("api_key", creds.api_key);
        let body = NewSessionBody { request_token };
        let resp = self
            .request(
                Method::POST,
                SESSION_NEW_PATH,
                &params,
                Payload::json(&body)?,
                None,
            )
            .await?
            .expect_status(&[200])?;
        let session: SessionResponse = resp.json()?;
        Ok(session.session_id)
    }
}
