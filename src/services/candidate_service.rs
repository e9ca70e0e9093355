use std::sync::Arc;
use uuid::Uuid;

use crate::dto::candidate_dto::{CreateCandidatePayload, UpdateCandidatePayload};
use crate::error::Result;
use crate::models::analytics::AnalyticsSnapshot;
use crate::models::candidate::{Candidate, CandidateStatus, NewCandidate, ResumeRef};
use crate::models::filter::{FilterCriteria, SortKey};
use crate::pipeline::{self, PipelineBoard};
use crate::store::CandidateStore;
use crate::utils::time;

/// Wires dashboard actions to the pipeline engine and the candidate store.
#[derive(Clone)]
pub struct CandidateService {
    store: Arc<dyn CandidateStore>,
}

impl CandidateService {
    pub fn new(store: Arc<dyn CandidateStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, criteria: &FilterCriteria) -> Result<Vec<Candidate>> {
        let all = self.store.list_all().await?;
        let visible = pipeline::query(&all, criteria);
        if criteria.is_filtering() {
            tracing::debug!(
                search = %criteria.search,
                experience = criteria.experience.as_str(),
                sort = criteria.sort.as_str(),
                shown = visible.len(),
                total = all.len(),
                "Filtered candidate list"
            );
        }
        Ok(visible)
    }

    pub async fn board(&self, criteria: &FilterCriteria) -> Result<PipelineBoard> {
        let visible = self.list(criteria).await?;
        Ok(pipeline::group_by_status(visible))
    }

    pub async fn get(&self, id: Uuid) -> Result<Candidate> {
        self.store.get_one(id).await
    }

    pub async fn roles(&self) -> Result<Vec<String>> {
        let all = self.store.list_all().await?;
        Ok(pipeline::distinct_roles(&all))
    }

    /// Metrics always cover the whole pool, whatever the board is filtered to.
    pub async fn analytics(&self) -> Result<AnalyticsSnapshot> {
        let all = self.store.list_all().await?;
        Ok(pipeline::aggregate(&all))
    }

    /// Candidates for export, newest application first, optionally narrowed to `ids`.
    pub async fn export_rows(&self, ids: Option<&[Uuid]>) -> Result<Vec<Candidate>> {
        let mut rows = self.list(&FilterCriteria::sorted_by(SortKey::NewestFirst)).await?;
        if let Some(ids) = ids.filter(|ids| !ids.is_empty()) {
            rows.retain(|c| ids.contains(&c.id));
        }
        Ok(rows)
    }

    pub async fn create(&self, payload: CreateCandidatePayload) -> Result<Candidate> {
        let status = match payload.status.as_deref() {
            Some(raw) => raw.parse::<CandidateStatus>()?,
            None => CandidateStatus::default(),
        };
        let now = time::now();
        let resume = payload.resume();

        let candidate = self
            .store
            .create(NewCandidate {
                name: payload.name,
                email: payload.email,
                phone: payload.phone,
                role: payload.role,
                experience: payload.experience,
                status,
                resume,
                notes: payload.notes,
                applied_date: now,
                last_updated: now,
            })
            .await?;

        tracing::info!(candidate_id = %candidate.id, status = %candidate.status, "Candidate created");
        Ok(candidate)
    }

    /// Applies a board move. Dropping a card back on its own column writes nothing.
    pub async fn change_status(&self, id: Uuid, requested: &str) -> Result<Candidate> {
        let target: CandidateStatus = requested.parse()?;
        let current = self.store.get_one(id).await?;

        if pipeline::is_noop(&current, target) {
            tracing::debug!(candidate_id = %id, status = %target, "Status unchanged, skipping write");
            return Ok(current);
        }

        let moved = pipeline::transition_to(&current, target, time::now());
        let saved = self.store.save(&moved).await?;
        tracing::info!(
            candidate_id = %id,
            from = %current.status,
            to = %saved.status,
            "Candidate status changed"
        );
        Ok(saved)
    }

    /// Direct edit of candidate fields. A status in the payload goes through the state machine.
    pub async fn update(&self, id: Uuid, payload: UpdateCandidatePayload) -> Result<Candidate> {
        let current = self.store.get_one(id).await?;
        let mut updated = match payload.status.as_deref() {
            Some(raw) => pipeline::transition(&current, raw)?,
            None => current.clone(),
        };

        if let Some(name) = payload.name {
            updated.name = name;
        }
        if let Some(email) = payload.email {
            updated.email = email;
        }
        if let Some(phone) = payload.phone {
            updated.phone = Some(phone).filter(|p| !p.is_empty());
        }
        if let Some(role) = payload.role {
            updated.role = role;
        }
        if let Some(experience) = payload.experience {
            updated.experience = experience;
        }
        if let Some(notes) = payload.notes {
            updated.notes = notes;
        }
        match (payload.resume_url, payload.resume_file_name) {
            (Some(url), file_name) => {
                updated.resume = Some(ResumeRef {
                    url,
                    file_name: file_name.unwrap_or_default(),
                });
            }
            // A rename without a new upload; ignored when there is no resume to rename.
            (None, Some(file_name)) => {
                if let Some(resume) = updated.resume.as_mut() {
                    resume.file_name = file_name;
                }
            }
            (None, None) => {}
        }

        if updated == current {
            return Ok(current);
        }

        updated.last_updated = time::now().max(updated.applied_date);
        let saved = self.store.save(&updated).await?;
        tracing::info!(candidate_id = %id, "Candidate updated");
        Ok(saved)
    }
}
