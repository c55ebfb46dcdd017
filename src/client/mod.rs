mod store;

pub use store::{TaskStats, TaskStore};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::routes::tasks::dto::{StatusFilter, UpdateTask};
use crate::routes::tasks::model::Task;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with an error payload.
    #[error("{message}")]
    Api { message: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

/// Thin wrapper over the task API. One instance per base URL and token.
pub struct TasksClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl TasksClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list(&self, filter: StatusFilter) -> Result<Vec<Task>, ClientError> {
        let mut req = self
            .http
            .get(self.url("/api/tasks"))
            .bearer_auth(&self.token);
        if let Some(status) = filter.query_value() {
            req = req.query(&[("status", status)]);
        }
        parse(req.send().await?).await
    }

    pub async fn create(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<Task, ClientError> {
        let resp = self
            .http
            .post(self.url("/api/tasks"))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "title": title, "description": description }))
            .send()
            .await?;
        parse(resp).await
    }

    pub async fn update(&self, id: Uuid, updates: &UpdateTask) -> Result<Task, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("/api/tasks/{id}")))
            .bearer_auth(&self.token)
            .json(updates)
            .send()
            .await?;
        parse(resp).await
    }

    pub async fn toggle(&self, id: Uuid) -> Result<Task, ClientError> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/tasks/{id}/toggle")))
            .bearer_auth(&self.token)
            .send()
            .await?;
        parse(resp).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteConfirmation, ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/tasks/{id}")))
            .bearer_auth(&self.token)
            .send()
            .await?;
        parse(resp).await
    }
}

async fn parse<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }

    #[derive(Deserialize)]
    struct ApiError {
        error: String,
    }

    let message = resp
        .json::<ApiError>()
        .await
        .map(|e| e.error)
        .unwrap_or_else(|_| format!("Request failed with status {status}"));

    Err(ClientError::Api { message })
}
