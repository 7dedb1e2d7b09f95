//! HTTP client for the user and todo endpoints.

use log::{debug, info};
use reqwest::Client;

use crate::api::models::{Todo, User};
use crate::error::ClientError;
use crate::report::ProgressSummary;

/// Fixed public endpoint serving the user and todo records.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Client for the two lookup endpoints.
///
/// Requests are single-attempt: no retry, no caching, no timeout beyond the
/// transport default.
#[derive(Debug, Clone)]
pub struct TodoApiClient {
    client: Client,
    base_url: String,
}

impl Default for TodoApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoApiClient {
    /// Client against the fixed public endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an alternative endpoint. Tests use this to point at a
    /// local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        TodoApiClient {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve the employee name, then the task list, strictly in sequence.
    ///
    /// A failure on the user lookup prevents the todo lookup from being
    /// attempted at all.
    pub async fn fetch_progress(&self, employee_id: i64) -> Result<ProgressSummary, ClientError> {
        let user = self.fetch_user(employee_id).await?;
        let todos = self.fetch_todos(employee_id).await?;
        Ok(ProgressSummary::from_todos(user.display_name(), &todos))
    }

    /// Fetch the employee record for `employee_id`.
    ///
    /// The identifier is passed through verbatim; out-of-range values are
    /// answered by the remote service, not rejected locally.
    pub async fn fetch_user(&self, employee_id: i64) -> Result<User, ClientError> {
        let url = format!("{}/users/{}", self.base_url, employee_id);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await.map_err(|source| {
            ClientError::Transport {
                url: url.clone(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("user lookup for {employee_id} failed with status {status}");
            return Err(ClientError::Status { url, status });
        }

        let user = response
            .json::<User>()
            .await
            .map_err(|source| ClientError::Decode {
                url: url.clone(),
                source,
            })?;

        info!("resolved employee {} to {}", employee_id, user.display_name());
        Ok(user)
    }

    /// Fetch every to-do item owned by `employee_id`. The filter runs
    /// server-side via the `userId` query parameter.
    pub async fn fetch_todos(&self, employee_id: i64) -> Result<Vec<Todo>, ClientError> {
        let url = format!("{}/todos?userId={}", self.base_url, employee_id);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await.map_err(|source| {
            ClientError::Transport {
                url: url.clone(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("todo lookup for {employee_id} failed with status {status}");
            return Err(ClientError::Status { url, status });
        }

        let todos = response
            .json::<Vec<Todo>>()
            .await
            .map_err(|source| ClientError::Decode {
                url: url.clone(),
                source,
            })?;

        info!("fetched {} todos for employee {}", todos.len(), employee_id);
        Ok(todos)
    }
}
