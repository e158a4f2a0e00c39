//! Task API client
//! Talks to the REST endpoint that owns the task records

use crate::types::{NewTask, Task, TaskId};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure of a single API request
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Operations the board needs from the task backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// `GET /tasks`
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// `POST /tasks`, returns the stored record with its server-assigned id
    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError>;

    /// `PUT /tasks/{id}` with the full record. Only the response status matters.
    async fn update_task(&self, task: &Task) -> Result<(), ApiError>;
}

/// `TaskApi` over HTTP
pub struct HttpTaskApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn task_url(&self, id: &TaskId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        debug!(url = %url, status = %status, "Response received");
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }

    async fn read_body(response: reqwest::Response, url: &str) -> Result<Vec<u8>, ApiError> {
        let body = response.bytes().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.base_url.as_str();
        let response = self.send(self.client.get(url), url).await?;
        let body = Self::read_body(response, url).await?;
        decode_task_list(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let url = self.base_url.as_str();
        let response = self.send(self.client.post(url).json(task), url).await?;
        let body = Self::read_body(response, url).await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn update_task(&self, task: &Task) -> Result<(), ApiError> {
        let url = self.task_url(&task.id);
        self.send(self.client.put(&url).json(task), &url).await?;
        Ok(())
    }
}

/// Decode a task list, dropping records that are not valid tasks.
/// The body itself must still be a JSON array.
pub fn decode_task_list(body: &[u8]) -> Result<Vec<Task>, serde_json::Error> {
    let records: Vec<serde_json::Value> = serde_json::from_slice(body)?;
    let total = records.len();

    let tasks: Vec<Task> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Task>(record.clone()) {
            Ok(task) => Some(task),
            Err(e) => {
                warn!(error = %e, record = %record, "Skipping malformed task record");
                None
            }
        })
        .collect();

    if tasks.len() != total {
        warn!(kept = tasks.len(), total, "Task list contained malformed records");
    }
    Ok(tasks)
}
