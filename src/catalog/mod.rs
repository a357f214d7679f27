//! Exercise catalog: a remote source with a static fallback.
//!
//! Configuration is via environment variables:
//! - `EXERCISEDB_URL` - Base URL (default: `https://exercisedb.p.rapidapi.com`)
//! - `EXERCISEDB_API_KEY` - RapidAPI key; without it only the fallback list is served
//! - `EXERCISEDB_TIMEOUT_SECS` - Request timeout (default: 10)

mod client;
mod fallback;

use std::future::Future;
use std::time::Duration;

pub use client::{CatalogError, RemoteCatalog};
pub use fallback::StaticCatalog;

use crate::models::{CatalogOrigin, Exercise, ExerciseList};

pub const DEFAULT_URL: &str = "https://exercisedb.p.rapidapi.com";
pub const DEFAULT_TARGET: &str = "chest";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// At most this many exercises are shown per target.
pub const MAX_EXERCISES: usize = 12;

/// Anything that can list exercises for a target muscle group.
pub trait ExerciseSource: Send + Sync {
    fn fetch_by_target(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<Vec<Exercise>, CatalogError>> + Send;
}

/// Try `primary`; on any failure serve `fallback` instead.
pub async fn fetch_with_fallback<P, F>(primary: &P, fallback: &F, target: &str) -> ExerciseList
where
    P: ExerciseSource,
    F: ExerciseSource,
{
    match primary.fetch_by_target(target).await {
        Ok(exercises) => ExerciseList {
            target: target.to_string(),
            origin: CatalogOrigin::Remote,
            exercises,
        },
        Err(e) => {
            tracing::warn!("Using fallback exercises for '{}': {}", target, e);
            fallback_list(fallback, target).await
        }
    }
}

async fn fallback_list<F: ExerciseSource>(fallback: &F, target: &str) -> ExerciseList {
    let exercises = match fallback.fetch_by_target(target).await {
        Ok(exercises) => exercises,
        Err(e) => {
            tracing::error!("Fallback exercise source failed: {}", e);
            Vec::new()
        }
    };
    ExerciseList {
        target: target.to_string(),
        origin: CatalogOrigin::Fallback,
        exercises,
    }
}

/// Catalog settings loaded from the environment.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("EXERCISEDB_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        let api_key = std::env::var("EXERCISEDB_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let timeout = std::env::var("EXERCISEDB_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            api_key,
            timeout: Duration::from_secs(timeout),
        }
    }
}

/// The catalog as the presentation layer sees it: remote when configured,
/// static otherwise, and static whenever the remote fails.
#[derive(Debug, Clone)]
pub struct Catalog {
    remote: Option<RemoteCatalog>,
    fallback: StaticCatalog,
}

impl Catalog {
    pub fn new(config: &CatalogConfig) -> Self {
        let remote = match &config.api_key {
            None => {
                tracing::info!("No EXERCISEDB_API_KEY set, serving fallback exercises only");
                None
            }
            Some(key) => match RemoteCatalog::new(&config.base_url, key.clone(), config.timeout) {
                Ok(remote) => Some(remote),
                Err(e) => {
                    tracing::warn!("Remote exercise catalog disabled: {}", e);
                    None
                }
            },
        };
        Self {
            remote,
            fallback: StaticCatalog,
        }
    }

    pub fn from_env() -> Self {
        Self::new(&CatalogConfig::from_env())
    }

    pub fn offline() -> Self {
        Self {
            remote: None,
            fallback: StaticCatalog,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn fetch(&self, target: &str) -> ExerciseList {
        match &self.remote {
            Some(remote) => fetch_with_fallback(remote, &self.fallback, target).await,
            None => fallback_list(&self.fallback, target).await,
        }
    }
}
