use serde::Deserialize;
use time::OffsetDateTime;

/// A registered account, as returned by POST /users/ and GET /users/me.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub created_at: Option<OffsetDateTime>,
}

/// Response from POST /login.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}
