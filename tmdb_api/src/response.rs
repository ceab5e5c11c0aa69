//! Raw HTTP responses returned by the client.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::Error;

/// A response that made it through the transport: status, headers and the
/// fully-read body. Status policy is applied by the verb helpers, not here.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(|e| {
            tracing::error!(
                "Failed to parse response: {} | body: {}",
                e,
                truncate_body(&self.text())
            );
            Error::Generic(format!("Failed to parse response: {}", e))
        })
    }

    /// Converts this response into the error reported for an unaccepted status.
    pub(crate) fn into_error(self) -> Error {
        let body = self.text();
        tracing::error!(
            "Request failed with status {}: {}",
            self.status,
            truncate_body(&body)
        );
        Error::Response {
            status: self.status.as_u16(),
            body,
        }
    }

    /// Passes the response through when its status is in `accepted`.
    pub(crate) fn expect_status(self, accepted: &[u16]) -> Result<Self, Error> {
        if accepted.contains(&self.status()) {
            Ok(self)
        } else {
            Err(self.into_error())
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
