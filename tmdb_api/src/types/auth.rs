use serde::{Deserialize, Serialize};

/// Body of `GET /authentication/token/new`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RequestTokenResponse {
    #[serde(default)]
    pub success: bool,
    /// Expiry timestamp as sent by the API, e.g. `2024-01-01 12:00:00 UTC`.
    #[serde(default)]
    pub expires_at: Option<String>,
    pub request_token: String,
}

/// Body of `POST /authentication/session/new`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SessionResponse {
    #[serde(default)]
    pub success: bool,
    pub session_id: String,
}

#[derive(Serialize)]
pub(crate) struct ValidateWithLoginBody<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub request_token: &'a str,
}

#[derive(Serialize)]
pub(crate) struct NewSessionBody<'a> {
    pub request_token: &'a str,
}
