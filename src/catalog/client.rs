//! HTTP client for an ExerciseDB-compatible catalog.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use super::{ExerciseSource, MAX_EXERCISES};
use crate::models::Exercise;

/// Catalog errors. Always recovered by the fallback list.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    base_url: Url,
    api_key: String,
    client: Client,
}

impl RemoteCatalog {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidUrl(base_url.to_string()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            client,
        })
    }

    /// `{base_url}/exercises/target/{target}`, with `target` escaped as one
    /// path segment.
    fn target_url(&self, target: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["exercises", "target", target]);
        }
        url
    }

    fn host(&self) -> &str {
        self.base_url.host_str().unwrap_or_default()
    }
}

impl ExerciseSource for RemoteCatalog {
    async fn fetch_by_target(&self, target: &str) -> Result<Vec<Exercise>, CatalogError> {
        let url = self.target_url(target);
        tracing::debug!("Fetching exercises from {}", url);

        let response = self
            .client
            .get(url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", self.host())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status { status, body });
        }

        let mut exercises: Vec<Exercise> = response.json().await?;
        exercises.truncate(MAX_EXERCISES);
        Ok(exercises)
    }
}
