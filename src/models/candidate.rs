use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Error;

/// Hiring pipeline stage. The four stages are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl CandidateStatus {
    /// All stages in board column order.
    pub const ALL: [CandidateStatus; 4] = [
        CandidateStatus::Applied,
        CandidateStatus::Interview,
        CandidateStatus::Offer,
        CandidateStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Applied => "applied",
            CandidateStatus::Interview => "interview",
            CandidateStatus::Offer => "offer",
            CandidateStatus::Rejected => "rejected",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CandidateStatus::Applied => "Applied",
            CandidateStatus::Interview => "Interview",
            CandidateStatus::Offer => "Offer",
            CandidateStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applied" => Ok(CandidateStatus::Applied),
            "interview" => Ok(CandidateStatus::Interview),
            "offer" => Ok(CandidateStatus::Offer),
            "rejected" => Ok(CandidateStatus::Rejected),
            other => Err(Error::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRef {
    pub url: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub experience: u32,
    pub status: CandidateStatus,
    pub resume: Option<ResumeRef>,
    pub notes: String,
    pub applied_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// A candidate that has not been assigned an identity by the store yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub experience: u32,
    pub status: CandidateStatus,
    pub resume: Option<ResumeRef>,
    pub notes: String,
    pub applied_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl NewCandidate {
    pub fn with_id(self, id: Uuid) -> Candidate {
        Candidate {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            experience: self.experience,
            status: self.status,
            resume: self.resume,
            notes: self.notes,
            applied_date: self.applied_date,
            last_updated: self.last_updated,
        }
    }
}
