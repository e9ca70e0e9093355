use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, NewCandidate};
use crate::store::CandidateStore;

/// Process-local store used when no database is configured.
#[derive(Clone, Default)]
pub struct MemoryCandidateStore {
    candidates: Arc<RwLock<Vec<Candidate>>>,
}

impl MemoryCandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates: Arc::new(RwLock::new(candidates)),
        }
    }

    pub async fn len(&self) -> usize {
        self.candidates.read().await.len()
    }
}

#[async_trait]
impl CandidateStore for MemoryCandidateStore {
    async fn list_all(&self) -> Result<Vec<Candidate>> {
        let mut candidates = self.candidates.read().await.clone();
        candidates.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
        Ok(candidates)
    }

    async fn get_one(&self, id: Uuid) -> Result<Candidate> {
        self.candidates
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", id)))
    }

    async fn save(&self, candidate: &Candidate) -> Result<Candidate> {
        let mut guard = self.candidates.write().await;
        match guard.iter_mut().find(|c| c.id == candidate.id) {
            Some(existing) => *existing = candidate.clone(),
            None => guard.push(candidate.clone()),
        }
        Ok(candidate.clone())
    }

    async fn create(&self, candidate: NewCandidate) -> Result<Candidate> {
        let candidate = candidate.with_id(Uuid::new_v4());
        self.candidates.write().await.push(candidate.clone());
        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::CandidateStatus;
    use crate::pipeline::fixtures::{jan, sample_pool};

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = MemoryCandidateStore::with_candidates(sample_pool());
        let listed = store.list_all().await.unwrap();
        assert_eq!(listed.first().unwrap().applied_date, jan(15));
        assert_eq!(listed.last().unwrap().applied_date, jan(5));
    }

    #[tokio::test]
    async fn create_assigns_id_and_save_upserts() {
        let store = MemoryCandidateStore::new();
        let created = store
            .create(NewCandidate {
                name: "Hana Kim".into(),
                email: "hana@example.com".into(),
                phone: None,
                role: "Data Analyst".into(),
                experience: 4,
                status: CandidateStatus::Applied,
                resume: None,
                notes: String::new(),
                applied_date: jan(3),
                last_updated: jan(3),
            })
            .await
            .unwrap();
        assert_eq!(store.len().await, 1);

        let mut changed = created.clone();
        changed.status = CandidateStatus::Offer;
        store.save(&changed).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get_one(created.id).await.unwrap().status, CandidateStatus::Offer);
    }

    #[test]
    fn second_save_wins() {
        tokio_test::block_on(async {
            let store = MemoryCandidateStore::with_candidates(sample_pool());
            let original = store.list_all().await.unwrap().remove(0);

            let mut first = original.clone();
            first.notes = "first".into();
            let mut second = original.clone();
            second.status = CandidateStatus::Rejected;

            tokio_test::assert_ok!(store.save(&first).await);
            tokio_test::assert_ok!(store.save(&second).await);

            let stored = store.get_one(original.id).await.unwrap();
            assert_eq!(stored.notes, "");
            assert_eq!(stored.status, CandidateStatus::Rejected);
            assert_eq!(store.len().await, 5);
        });
    }

    #[tokio::test]
    async fn missing_candidate_is_not_found() {
        let store = MemoryCandidateStore::new();
        let err = store.get_one(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
