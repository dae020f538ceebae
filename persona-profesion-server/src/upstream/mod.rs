//! Upstream catalogs - persons, professions, statuses
//!
//! Provides a trait for fetching the three collections, with:
//! - Real implementation using reqwest
//! - Static implementation for testing
//!
//! No caching and no retries. One failing catalog fails the whole read.

pub mod http_client;
pub mod static_directory;

use async_trait::async_trait;

use crate::models::{Person, Profession, Snapshot, Status};

pub use http_client::HttpDirectory;
pub use static_directory::StaticDirectory;

/// Catalog names used in logs and error messages
pub const PERSONS: &str = "personas";
pub const PROFESSIONS: &str = "profesiones";
pub const STATUSES: &str = "estatus";

/// Error while consuming an upstream catalog
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("{service}: {error}")]
    Http {
        service: &'static str,
        #[source]
        error: reqwest::Error,
    },

    #[error("{service}: {reason}")]
    Unavailable {
        service: &'static str,
        reason: String,
    },

    #[error("HTTP client setup failed: {0}")]
    Client(#[from] reqwest::Error),
}

impl UpstreamError {
    /// Catalog that failed, if the error came from a fetch
    pub fn service(&self) -> Option<&'static str> {
        match self {
            Self::Http { service, .. } | Self::Unavailable { service, .. } => Some(service),
            Self::Client(_) => None,
        }
    }
}

/// Trait for fetching upstream collections (testable)
#[async_trait]
pub trait Directory: Send + Sync {
    async fn persons(&self) -> Result<Vec<Person>, UpstreamError>;
    async fn professions(&self) -> Result<Vec<Profession>, UpstreamError>;
    async fn statuses(&self) -> Result<Vec<Status>, UpstreamError>;
}

/// Fetch all three collections concurrently.
///
/// Fails on the first error; whatever the other fetches returned is dropped.
pub async fn fetch_snapshot(directory: &dyn Directory) -> Result<Snapshot, UpstreamError> {
    let (persons, professions, statuses) = tokio::try_join!(
        directory.persons(),
        directory.professions(),
        directory.statuses(),
    )
    .inspect_err(|e| tracing::warn!(service = ?e.service(), error = %e, "upstream fetch failed"))?;

    tracing::debug!(
        persons = persons.len(),
        professions = professions.len(),
        statuses = statuses.len(),
        "upstream snapshot fetched"
    );

    Ok(Snapshot {
        persons,
        professions,
        statuses,
    })
}
