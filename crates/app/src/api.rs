//! HTTP data access for the tasks resource.
//!
//! One method per verb against the fixed `/api/tasks` path. Calls are
//! independent: no retries, no request cancellation, no shared state beyond
//! the connection pool inside [`reqwest::Client`].

use std::fmt;

use shared_types::Task;

/// Errors surfaced by [`TasksApi`] calls.
///
/// `NotFound` gets a dedicated variant because mutations keyed on an id that
/// no longer exists are the one failure callers may want to distinguish. All
/// other non-success statuses land in `Status` with the raw code and body.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (network unreachable, timeout).
    Transport(String),

    /// The server returned 404 — the task does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
            ApiError::NotFound => write!(f, "task not found"),
            ApiError::Status { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Decode(msg) => write!(f, "decoding response failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Client for the tasks resource at `{base_url}/api/tasks`.
#[derive(Debug, Clone)]
pub struct TasksApi {
    base_url: String,
    http: reqwest::Client,
}

impl TasksApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Client pointed at the configured backend: the `TASKS_API_BASE`
    /// compile-time override, or the local dev server.
    pub fn from_env() -> Self {
        Self::new(option_env!("TASKS_API_BASE").unwrap_or("http://127.0.0.1:8080"))
    }

    fn collection_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/api/tasks/{id}", self.base_url)
    }

    /// Fetch every task, in whatever order the backend returns them.
    pub async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let response = self.http.get(self.collection_url()).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// Persist a draft. The returned task carries the server-assigned id
    /// and timestamps.
    pub async fn create(&self, task: &Task) -> Result<Task, ApiError> {
        let response = self.http.post(self.collection_url()).json(task).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// Replace the task with `id` wholesale.
    pub async fn update(&self, id: i64, task: &Task) -> Result<Task, ApiError> {
        let response = self.http.put(self.item_url(id)).json(task).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// Remove the task with `id`. Success carries no payload.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}
