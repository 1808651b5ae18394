//! HTTP implementation of the person store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tokio::time::timeout;
use tracing::debug;

use crate::config::ServerConfig;
use crate::person::Person;
use crate::store::{PersonStore, StoreError};

/// Person store backed by a remote HTTP collection endpoint.
///
/// `base_url` is the collection itself: list and create address it
/// directly, the per-record operations append `/{id}`.
pub struct HttpPersonStore {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl HttpPersonStore {
    pub fn new(server: &ServerConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(server.connect_timeout_seconds as u64))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: server.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(server.request_timeout_seconds as u64),
        }
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Run one request under the configured timeout.
    async fn with_timeout<T>(
        &self,
        fut: impl std::future::Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match timeout(self.request_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}

/// Map a non-success response onto the store error taxonomy.
///
/// 404 becomes `NotFound` when the operation addressed a single record,
/// other 4xx become `Rejected` with whatever reason the body carries,
/// everything else keeps its status code.
async fn check_status(resp: Response, id: Option<&str>) -> Result<Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
    }

    if status.is_client_error() {
        let body = resp.text().await.unwrap_or_default();
        let reason = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .or_else(|| if body.is_empty() { None } else { Some(body) })
            .unwrap_or_else(|| status.to_string());
        return Err(StoreError::Rejected { reason });
    }

    Err(StoreError::Status {
        code: status.as_u16(),
    })
}

fn transport(source: reqwest::Error) -> StoreError {
    StoreError::Transport { source }
}

fn decode(source: reqwest::Error) -> StoreError {
    StoreError::Decode { source }
}

#[async_trait]
impl PersonStore for HttpPersonStore {
    async fn list(&self) -> Result<Vec<Person>, StoreError> {
        debug!(url = %self.base_url, "listing people");
        self.with_timeout(async {
            let resp = self
                .client
                .get(&self.base_url)
                .send()
                .await
                .map_err(transport)?;
            let resp = check_status(resp, None).await?;
            resp.json().await.map_err(decode)
        })
        .await
    }

    async fn get(&self, id: &str) -> Result<Person, StoreError> {
        debug!(id, "fetching person");
        self.with_timeout(async {
            let resp = self
                .client
                .get(self.record_url(id))
                .send()
                .await
                .map_err(transport)?;
            let resp = check_status(resp, Some(id)).await?;
            resp.json().await.map_err(decode)
        })
        .await
    }

    async fn create(&self, person: &Person) -> Result<Person, StoreError> {
        debug!(name = %person.name, "creating person");
        self.with_timeout(async {
            let resp = self
                .client
                .post(&self.base_url)
                .json(person)
                .send()
                .await
                .map_err(transport)?;
            let resp = check_status(resp, None).await?;
            resp.json().await.map_err(decode)
        })
        .await
    }

    async fn update(&self, id: &str, person: &Person) -> Result<(), StoreError> {
        debug!(id, "updating person");
        self.with_timeout(async {
            let resp = self
                .client
                .put(self.record_url(id))
                .json(person)
                .send()
                .await
                .map_err(transport)?;
            check_status(resp, Some(id)).await?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        debug!(id, "deleting person");
        self.with_timeout(async {
            let resp = self
                .client
                .delete(self.record_url(id))
                .send()
                .await
                .map_err(transport)?;
            check_status(resp, Some(id)).await?;
            Ok(())
        })
        .await
    }
}
