use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use syncdash_core::{CollectionItem, CollectionView, Job, QueueCounts};

use crate::{FailureKind, FetchError};

/// Connection settings for the dashboard's backing API.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base path of the read-only API, e.g. `http://127.0.0.1:5000/api`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/api".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    /// Unit statuses keyed by unit name, in backend order.
    pub systemd: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueueResponse {
    pub counts: QueueCounts,
    pub current_job: Option<Job>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogsResponse {
    /// Recent lines keyed by log name, in backend order.
    pub logs: IndexMap<String, Vec<String>>,
}

/// Collection payload, discriminated by its `status` field.
///
/// Besides `ok` and `missing_file` the backend emits `error` when its
/// inventory file exists but cannot be parsed; that case renders as an empty
/// inventory without the missing-data warning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CollectionResponse {
    Ok { items: Vec<CollectionItem> },
    MissingFile,
    Error,
}

impl CollectionResponse {
    pub fn into_view(self) -> CollectionView {
        match self {
            CollectionResponse::Ok { items } => CollectionView::Items(items),
            CollectionResponse::MissingFile => CollectionView::MissingFile,
            CollectionResponse::Error => CollectionView::Items(Vec::new()),
        }
    }
}

/// The four read-only resources the dashboard polls.
///
/// A trait seam so the aggregator and driver can be exercised against test
/// doubles; [`HttpStatusApi`] is the production implementation.
#[async_trait]
pub trait StatusApi: Send + Sync {
    async fn fetch_status(&self) -> Result<StatusResponse, FetchError>;
    async fn fetch_queue(&self) -> Result<QueueResponse, FetchError>;
    async fn fetch_logs(&self) -> Result<LogsResponse, FetchError>;
    async fn fetch_collection(&self) -> Result<CollectionResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpStatusApi {
    client: reqwest::Client,
    base: reqwest::Url,
}

impl HttpStatusApi {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let base = reqwest::Url::parse(&settings.base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, resource: &str) -> reqwest::Url {
        let mut url = self.base.clone();
        let path = format!("{}/{}", url.path().trim_end_matches('/'), resource);
        url.set_path(&path);
        url
    }

    /// Exactly one GET per call; no retries, no caching.
    async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(self.endpoint(resource))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response.json::<T>().await.map_err(map_reqwest_error)
    }
}

#[async_trait]
impl StatusApi for HttpStatusApi {
    async fn fetch_status(&self) -> Result<StatusResponse, FetchError> {
        self.get_json("status").await
    }

    async fn fetch_queue(&self) -> Result<QueueResponse, FetchError> {
        self.get_json("queue").await
    }

    async fn fetch_logs(&self) -> Result<LogsResponse, FetchError> {
        self.get_json("logs").await
    }

    async fn fetch_collection(&self) -> Result<CollectionResponse, FetchError> {
        self.get_json("collection").await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::MalformedBody, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
