//! In-memory assignment store
//!
//! Same semantics as the PostgreSQL store, kept in a `Vec` so insertion
//! order is the listing order.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::assignments::{not_found, AssignmentStore, DbError};
use crate::models::{Assignment, AssignmentKey, NewAssignment, INACTIVE_STATUS_ID};

#[derive(Debug, Default)]
pub struct MemoryAssignmentStore {
    rows: RwLock<Vec<Assignment>>,
}

impl MemoryAssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing rows
    pub fn with_rows(rows: Vec<Assignment>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Copy of every stored row
    pub async fn rows(&self) -> Vec<Assignment> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl AssignmentStore for MemoryAssignmentStore {
    async fn insert(&self, new: NewAssignment) -> Result<Assignment, DbError> {
        let assignment = new.into_assignment();
        self.rows.write().await.push(assignment.clone());
        Ok(assignment)
    }

    async fn list_all(&self) -> Result<Vec<Assignment>, DbError> {
        Ok(self.rows().await)
    }

    async fn list_by_person(&self, person_id: &str) -> Result<Vec<Assignment>, DbError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.person_id == person_id)
            .cloned()
            .collect())
    }

    async fn soft_delete(&self, key: &AssignmentKey) -> Result<u64, DbError> {
        let mut rows = self.rows.write().await;
        let mut updated = 0;
        for row in rows.iter_mut().filter(|row| key.matches(row)) {
            row.status_id = INACTIVE_STATUS_ID.to_string();
            updated += 1;
        }

        if updated == 0 {
            return Err(not_found(key));
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new(person: &str, profession: &str) -> NewAssignment {
        NewAssignment::new(
            Some(person.into()),
            Some(profession.into()),
            Some("2024-01-01".into()),
            Some("s1".into()),
        )
        .unwrap()
    }

    fn key(person: &str, profession: &str) -> AssignmentKey {
        AssignmentKey::new(Some(person.into()), Some(profession.into())).unwrap()
    }

    #[tokio::test]
    async fn list_by_person_filters() {
        let store = MemoryAssignmentStore::new();
        store.insert(new("p1", "f1")).await.unwrap();
        store.insert(new("p2", "f1")).await.unwrap();
        store.insert(new("p1", "f2")).await.unwrap();

        let rows = store.list_by_person("p1").await.unwrap();
        let professions: Vec<_> = rows.iter().map(|r| r.profession_id.as_str()).collect();
        assert_eq!(professions, vec!["f1", "f2"]);
        assert_eq!(store.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn duplicate_pairs_are_allowed() {
        let store = MemoryAssignmentStore::new();
        store.insert(new("p1", "f1")).await.unwrap();
        store.insert(new("p1", "f1")).await.unwrap();

        // Both duplicates are deactivated together
        assert_eq!(store.soft_delete(&key("p1", "f1")).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn soft_delete_only_touches_status() {
        let store = MemoryAssignmentStore::new();
        store.insert(new("p1", "f1")).await.unwrap();
        store.insert(new("p1", "f2")).await.unwrap();

        store.soft_delete(&key("p1", "f1")).await.unwrap();

        let rows = store.rows().await;
        assert_eq!(rows[0].person_id, "p1");
        assert_eq!(rows[0].profession_id, "f1");
        assert_eq!(rows[0].status_id, INACTIVE_STATUS_ID);
        assert_eq!(rows[1].status_id, "s1");
    }

    #[tokio::test]
    async fn soft_delete_missing_leaves_store_unchanged() {
        let store = MemoryAssignmentStore::new();
        store.insert(new("p1", "f1")).await.unwrap();
        let before = store.rows().await;

        let err = store.soft_delete(&key("p1", "f9")).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(store.rows().await, before);
    }
}
