use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::candidate::{Candidate, ResumeRef};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCandidatePayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub role: String,
    pub experience: u32,
    /// Starting stage, `applied` when absent.
    pub status: Option<String>,
    pub resume_url: Option<String>,
    pub resume_file_name: Option<String>,
    #[serde(default)]
    pub notes: String,
}

impl CreateCandidatePayload {
    pub fn resume(&self) -> Option<ResumeRef> {
        self.resume_url.as_ref().map(|url| ResumeRef {
            url: url.clone(),
            file_name: self.resume_file_name.clone().unwrap_or_default(),
        })
    }
}

/// Partial edit from the candidate dialog. Absent fields stay as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCandidatePayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub role: Option<String>,
    pub experience: Option<u32>,
    pub status: Option<String>,
    pub resume_url: Option<String>,
    pub resume_file_name: Option<String>,
    pub notes: Option<String>,
}

/// Body of a board drag-and-drop: the column the card landed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    pub candidate_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateListResponse {
    pub items: Vec<Candidate>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesResponse {
    pub roles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_requires_name_role_and_valid_email() {
        let payload: CreateCandidatePayload = serde_json::from_str(
            r#"{"name":"","email":"not-an-email","role":"","experience":2}"#,
        )
        .unwrap();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("role"));
    }

    #[test]
    fn negative_experience_does_not_deserialize() {
        let parsed = serde_json::from_str::<CreateCandidatePayload>(
            r#"{"name":"A","email":"a@example.com","role":"QA","experience":-1}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn resume_reference_needs_a_url() {
        let payload: CreateCandidatePayload = serde_json::from_str(
            r#"{"name":"A","email":"a@example.com","role":"QA","experience":1,"resume_file_name":"cv.pdf"}"#,
        )
        .unwrap();
        assert!(payload.resume().is_none());
    }
}
