use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{NewTodo, Todo, TodoUpdate, TokenResponse, User};

/// Async client for the to-do backend.
///
/// Authenticated calls attach `Authorization: Bearer <token>`; the token is
/// handed in by the caller (it lives in the session store, not in here as
/// ambient state).
#[derive(Debug, Clone)]
pub struct TodoClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(base_url: &str, token: Option<String>) -> Self {
        let mut client = Self::new(base_url);
        client.token = token;
        client
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// POST /login — form-encoded credentials, returns a bearer token.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, TodoApiError> {
        tracing::debug!("POST /login");
        let resp = self
            .http
            .post(self.url("/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|e| TodoApiError::Response(e.to_string()))?;

        parse_json(check(resp).await?).await
    }

    /// POST /users/ — create an account.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, TodoApiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }

        tracing::debug!("POST /users/");
        let resp = self
            .http
            .post(self.url("/users/"))
            .json(&Body { email, password })
            .send()
            .await
            .map_err(|e| TodoApiError::Response(e.to_string()))?;

        parse_json(check(resp).await?).await
    }

    /// GET /users/me — the account behind the current token.
    pub async fn me(&self) -> Result<User, TodoApiError> {
        self.get_json("/users/me").await
    }

    /// GET /todos/ — the full task list for the authenticated user.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoApiError> {
        self.get_json("/todos/").await
    }

    /// POST /todos/ — create a task.
    pub async fn create_todo(&self, payload: &NewTodo) -> Result<Todo, TodoApiError> {
        tracing::debug!(title = %payload.title, "POST /todos/");
        let resp = self
            .authed(self.http.post(self.url("/todos/")))
            .json(payload)
            .send()
            .await
            .map_err(|e| TodoApiError::Response(e.to_string()))?;

        parse_json(check(resp).await?).await
    }

    /// PUT /todos/{id} — replace the editable fields of a task.
    pub async fn update_todo(&self, id: i32, payload: &TodoUpdate) -> Result<Todo, TodoApiError> {
        tracing::debug!(id, "PUT /todos/{{id}}");
        let resp = self
            .authed(self.http.put(self.url(&format!("/todos/{id}"))))
            .json(payload)
            .send()
            .await
            .map_err(|e| TodoApiError::Response(e.to_string()))?;

        parse_json(check(resp).await?).await
    }

    /// PUT /todos/{id} with only the completion flag.
    pub async fn set_completed(&self, id: i32, completed: bool) -> Result<Todo, TodoApiError> {
        #[derive(Serialize)]
        struct Body {
            completed: bool,
        }

        tracing::debug!(id, completed, "PUT /todos/{{id}} (toggle)");
        let resp = self
            .authed(self.http.put(self.url(&format!("/todos/{id}"))))
            .json(&Body { completed })
            .send()
            .await
            .map_err(|e| TodoApiError::Response(e.to_string()))?;

        parse_json(check(resp).await?).await
    }

    /// DELETE /todos/{id} — no response body.
    pub async fn delete_todo(&self, id: i32) -> Result<(), TodoApiError> {
        tracing::debug!(id, "DELETE /todos/{{id}}");
        let resp = self
            .authed(self.http.delete(self.url(&format!("/todos/{id}"))))
            .send()
            .await
            .map_err(|e| TodoApiError::Response(e.to_string()))?;

        check(resp).await?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TodoApiError> {
        tracing::debug!(path, "GET");
        let resp = self
            .authed(self.http.get(self.url(path)))
            .send()
            .await
            .map_err(|e| TodoApiError::Response(e.to_string()))?;

        parse_json(check(resp).await?).await
    }
}

#[derive(Error, Debug)]
pub enum TodoApiError {
    #[error("Unauthorized")]
    Unauthorized,
    /// The backend rejected the request and said why (FastAPI `detail`).
    #[error("{0}")]
    Api(String),
    #[error("ResponseError: {0}")]
    Response(String),
    #[error("ParsingError: {0}")]
    Parsing(String),
}

/// Map a non-success status to an error, extracting the backend's
/// `{"detail": ...}` body when there is one.
async fn check(resp: Response) -> Result<Response, TodoApiError> {
    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(TodoApiError::Unauthorized);
    }
    if status.is_success() {
        return Ok(resp);
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        detail: String,
    }

    let body = resp.text().await.unwrap_or_default();
    tracing::error!(%status, %body, "request failed");
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => Err(TodoApiError::Api(parsed.detail)),
        Err(_) => Err(TodoApiError::Response(format!("HTTP {status}"))),
    }
}

async fn parse_json<T: DeserializeOwned>(resp: Response) -> Result<T, TodoApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| TodoApiError::Parsing(format!("Failed to parse response as JSON: {e}")))
}
