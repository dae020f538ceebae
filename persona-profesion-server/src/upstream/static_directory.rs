//! In-process catalogs for tests and offline runs

use async_trait::async_trait;

use super::{Directory, UpstreamError, PERSONS, PROFESSIONS, STATUSES};
use crate::models::{Person, Profession, Snapshot, Status};

/// Serves fixed collections; optionally fails one catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    snapshot: Snapshot,
    failing: Option<&'static str>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_person(mut self, person: Person) -> Self {
        self.snapshot.persons.push(person);
        self
    }

    pub fn with_profession(mut self, profession: Profession) -> Self {
        self.snapshot.professions.push(profession);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.snapshot.statuses.push(status);
        self
    }

    /// Make the named catalog (`PERSONS`, `PROFESSIONS`, `STATUSES`) fail.
    pub fn failing(mut self, service: &'static str) -> Self {
        self.failing = Some(service);
        self
    }

    fn serve<T: Clone>(&self, service: &'static str, items: &[T]) -> Result<Vec<T>, UpstreamError> {
        if self.failing == Some(service) {
            return Err(UpstreamError::Unavailable {
                service,
                reason: "503 Service Unavailable".to_string(),
            });
        }
        Ok(items.to_vec())
    }
}

#[async_trait]
impl Directory for StaticDirectory {
    async fn persons(&self) -> Result<Vec<Person>, UpstreamError> {
        self.serve(PERSONS, &self.snapshot.persons)
    }

    async fn professions(&self) -> Result<Vec<Profession>, UpstreamError> {
        self.serve(PROFESSIONS, &self.snapshot.professions)
    }

    async fn statuses(&self) -> Result<Vec<Status>, UpstreamError> {
        self.serve(STATUSES, &self.snapshot.statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn only_named_catalog_fails() {
        let directory = StaticDirectory::new()
            .with_status(Status::new("s1", "Activo"))
            .failing(PERSONS);

        assert!(directory.persons().await.is_err());
        assert_eq!(directory.statuses().await.unwrap().len(), 1);
    }
}
