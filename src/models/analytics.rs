use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::candidate::{Candidate, CandidateStatus};

/// Per-stage counts. Every stage is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub applied: usize,
    pub interview: usize,
    pub offer: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn get(&self, status: CandidateStatus) -> usize {
        match status {
            CandidateStatus::Applied => self.applied,
            CandidateStatus::Interview => self.interview,
            CandidateStatus::Offer => self.offer,
            CandidateStatus::Rejected => self.rejected,
        }
    }

    pub fn increment(&mut self, status: CandidateStatus) {
        match status {
            CandidateStatus::Applied => self.applied += 1,
            CandidateStatus::Interview => self.interview += 1,
            CandidateStatus::Offer => self.offer += 1,
            CandidateStatus::Rejected => self.rejected += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.applied + self.interview + self.offer + self.rejected
    }
}

/// Dashboard metrics derived from the full candidate collection. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_applications: usize,
    pub applications_by_status: StatusCounts,
    pub applications_by_role: BTreeMap<String, usize>,
    pub average_experience: f64,
    pub recent_applications: Vec<Candidate>,
}
