//! HTTP client for the TMDB v3 API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use url::Url;

use crate::{
    config::TMDB_BASE_URL, user_agent::get_user_agent, ApiResponse, ClientConfig, Error, Params,
};

/// Request body. A request carries JSON or raw bytes, never both.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    #[default]
    Empty,
    /// Sent as compact JSON with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Sent verbatim; only caller-supplied headers are attached.
    Bytes(Vec<u8>),
}

impl Payload {
    /// Serializes `data` into a JSON payload.
    pub fn json<T: Serialize + ?Sized>(data: &T) -> Result<Self, Error> {
        serde_json::to_value(data)
            .map(Payload::Json)
            .map_err(|e| Error::Generic(format!("Failed to serialize request body: {}", e)))
    }

    /// Builds a payload from optional JSON and optional raw parts.
    ///
    /// # Panics
    ///
    /// Panics if both parts are given.
    pub fn from_parts(json: Option<serde_json::Value>, bytes: Option<Vec<u8>>) -> Self {
        assert!(
            !(json.is_some() && bytes.is_some()),
            "Cannot have JSON and binary payload in a single request."
        );
        match (json, bytes) {
            (Some(value), _) => Payload::Json(value),
            (None, Some(raw)) => Payload::Bytes(raw),
            (None, None) => Payload::Empty,
        }
    }
}

/// Session-aware HTTP client for the TMDB v3 API.
///
/// Until [`Client::login`] succeeds, requests carry only the parameters the
/// caller passes. Afterwards every request also carries `api_key` and
/// `session_id`.
pub struct Client {
    http: reqwest::Client,
    pub(crate) config: ClientConfig,
    /// Set only by a successful `login`.
    pub(crate) session_id: Option<String>,
}

impl Client {
    /// Creates a client for the production API. Fails when `api_url` is
    /// not under [`TMDB_BASE_URL`]. No network traffic happens here.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Self::with_origin(config, TMDB_BASE_URL)
    }

    /// Creates a client whose `api_url` is validated against a custom origin.
    /// Used for testing with wiremock.
    pub fn with_origin(config: ClientConfig, origin: &str) -> Result<Self, Error> {
        config.validate(origin)?;
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Generic(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self {
            http,
            config,
            session_id: None,
        })
    }

    /// Replaces the underlying transport, e.g. to configure timeouts or proxies.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn account_id(&self) -> Option<&str> {
        self.config.account_id.as_deref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_id.is_some()
    }

    /// Joins base URL, path and query, adding the session parameters when
    /// a session exists.
    pub(crate) fn build_url(&self, path: &str, params: &Params) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.config.api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Generic(format!("Invalid URL for path '{}': {}", path, e))
        })?;
        let mut params = params.clone();
        if let Some(session_id) = &self.session_id {
            params.insert("api_key", self.config.api_key.as_deref().unwrap_or_default());
            params.insert("session_id", session_id);
        }
        Ok(params.add_to_url(&url))
    }

    /// Sends one request and returns the raw response.
    ///
    /// Without explicit `headers`, `Accept: application/json` is sent. A JSON
    /// payload adds `Content-Type: application/json`. Any status other than
    /// 401 is returned untouched; 401 becomes [`Error::Auth`].
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        payload: Payload,
        headers: Option<HeaderMap>,
    ) -> Result<ApiResponse, Error> {
        let url = self.build_url(path, params)?;
        let mut headers = headers.unwrap_or_else(|| {
            let mut defaults = HeaderMap::new();
            defaults.insert(ACCEPT, HeaderValue::from_static("application/json"));
            defaults
        });
        let body = match payload {
            Payload::Empty => None,
            Payload::Json(value) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(serde_json::to_vec(&value).map_err(|e| {
                    Error::Generic(format!("Failed to serialize request body: {}", e))
                })?)
            }
            Payload::Bytes(raw) => Some(raw),
        };
        tracing::debug!("{} {}", method, path);
        self.send(method, url, body, headers).await
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        headers: HeaderMap,
    ) -> Result<ApiResponse, Error> {
        let mut builder = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::Generic(e.to_string())
        })?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::error!("Request rejected with {}", status);
            return Err(Error::Auth(format!(
                "Failed to authenticate with the instance: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            )));
        }

        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Generic(e.to_string())
        })?;
        Ok(ApiResponse::new(status, headers, body.to_vec()))
    }

    /// GET; accepts 200 and 404.
    pub async fn get(&self, path: &str, params: &Params) -> Result<ApiResponse, Error> {
        self.request(Method::GET, path, params, Payload::Empty, None)
            .await?
            .expect_status(&[200, 404])
    }

    /// POST with a JSON body; accepts 200 and 201.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &T,
        params: &Params,
    ) -> Result<ApiResponse, Error> {
        self.request(Method::POST, path, params, Payload::json(data)?, None)
            .await?
            .expect_status(&[200, 201])
    }

    /// PATCH with a JSON body; accepts 200.
    pub async fn patch<T: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &T,
        params: &Params,
    ) -> Result<ApiResponse, Error> {
        self.request(Method::PATCH, path, params, Payload::json(data)?, None)
            .await?
            .expect_status(&[200])
    }

    /// PUT with a JSON body; accepts 200.
    pub async fn put<T: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &T,
        params: &Params,
    ) -> Result<ApiResponse, Error> {
        self.request(Method::PUT, path, params, Payload::json(data)?, None)
            .await?
            .expect_status(&[200])
    }

    /// DELETE; accepts 204 only.
    pub async fn delete(&self, path: &str, params: &Params) -> Result<ApiResponse, Error> {
        self.request(Method::DELETE, path, params, Payload::Empty, None)
            .await?
            .expect_status(&[204])
    }
}
