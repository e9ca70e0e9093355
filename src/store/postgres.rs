use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, NewCandidate, ResumeRef};
use crate::store::CandidateStore;

const CANDIDATE_COLUMNS: &str = "id, name, email, phone, role, experience, status, \
     resume_url, resume_file_name, notes, applied_date, last_updated";

#[derive(Debug, FromRow)]
struct CandidateRow {
    id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    role: String,
    experience: i32,
    status: String,
    resume_url: Option<String>,
    resume_file_name: Option<String>,
    notes: String,
    applied_date: DateTime<Utc>,
    last_updated: DateTime<Utc>,
}

impl TryFrom<CandidateRow> for Candidate {
    type Error = Error;

    fn try_from(row: CandidateRow) -> Result<Self> {
        let experience = u32::try_from(row.experience).map_err(|_| {
            Error::Internal(format!(
                "Candidate {} has negative experience {}",
                row.id, row.experience
            ))
        })?;
        let resume = row.resume_url.map(|url| ResumeRef {
            url,
            file_name: row.resume_file_name.unwrap_or_default(),
        });

        Ok(Candidate {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            role: row.role,
            experience,
            status: row.status.parse()?,
            resume,
            notes: row.notes,
            applied_date: row.applied_date,
            last_updated: row.last_updated,
        })
    }
}

fn experience_param(experience: u32) -> Result<i32> {
    i32::try_from(experience)
        .map_err(|_| Error::BadRequest(format!("Experience {} is out of range", experience)))
}

#[derive(Clone)]
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn list_all(&self) -> Result<Vec<Candidate>> {
        let sql = format!(
            "SELECT {} FROM candidates ORDER BY applied_date DESC",
            CANDIDATE_COLUMNS
        );
        let rows = sqlx::query_as::<_, CandidateRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Candidate::try_from).collect()
    }

    async fn get_one(&self, id: Uuid) -> Result<Candidate> {
        let sql = format!("SELECT {} FROM candidates WHERE id = $1", CANDIDATE_COLUMNS);
        let row = sqlx::query_as::<_, CandidateRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", id)))?;
        Candidate::try_from(row)
    }

    async fn save(&self, candidate: &Candidate) -> Result<Candidate> {
        let sql = format!(
            r#"
            INSERT INTO candidates (
                id, name, email, phone, role, experience, status,
                resume_url, resume_file_name, notes, applied_date, last_updated
            ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                role = EXCLUDED.role,
                experience = EXCLUDED.experience,
                status = EXCLUDED.status,
                resume_url = EXCLUDED.resume_url,
                resume_file_name = EXCLUDED.resume_file_name,
                notes = EXCLUDED.notes,
                last_updated = EXCLUDED.last_updated
            RETURNING {}
            "#,
            CANDIDATE_COLUMNS
        );
        let row = sqlx::query_as::<_, CandidateRow>(&sql)
            .bind(candidate.id)
            .bind(&candidate.name)
            .bind(&candidate.email)
            .bind(&candidate.phone)
            .bind(&candidate.role)
            .bind(experience_param(candidate.experience)?)
            .bind(candidate.status.as_str())
            .bind(candidate.resume.as_ref().map(|r| r.url.clone()))
            .bind(candidate.resume.as_ref().map(|r| r.file_name.clone()))
            .bind(&candidate.notes)
            .bind(candidate.applied_date)
            .bind(candidate.last_updated)
            .fetch_one(&self.pool)
            .await?;
        Candidate::try_from(row)
    }

    async fn create(&self, candidate: NewCandidate) -> Result<Candidate> {
        let sql = format!(
            r#"
            INSERT INTO candidates (
                name, email, phone, role, experience, status,
                resume_url, resume_file_name, notes, applied_date, last_updated
            ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11)
            RETURNING {}
            "#,
            CANDIDATE_COLUMNS
        );
        let (resume_url, resume_file_name) = match candidate.resume {
            Some(resume) => (Some(resume.url), Some(resume.file_name)),
            None => (None, None),
        };
        let row = sqlx::query_as::<_, CandidateRow>(&sql)
            .bind(candidate.name)
            .bind(candidate.email)
            .bind(candidate.phone)
            .bind(candidate.role)
            .bind(experience_param(candidate.experience)?)
            .bind(candidate.status.as_str())
            .bind(resume_url)
            .bind(resume_file_name)
            .bind(candidate.notes)
            .bind(candidate.applied_date)
            .bind(candidate.last_updated)
            .fetch_one(&self.pool)
            .await?;
        Candidate::try_from(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::CandidateStatus;
    use crate::pipeline::fixtures::jan;

    fn row(status: &str, experience: i32) -> CandidateRow {
        CandidateRow {
            id: Uuid::new_v4(),
            name: "Alice Johnson".into(),
            email: "alice@example.com".into(),
            phone: Some("+1 555 0100".into()),
            role: "Frontend Developer".into(),
            experience,
            status: status.into(),
            resume_url: Some("/api/files/resume/abc".into()),
            resume_file_name: None,
            notes: String::new(),
            applied_date: jan(15),
            last_updated: jan(16),
        }
    }

    #[test]
    fn row_converts_into_candidate() {
        let candidate = Candidate::try_from(row("offer", 3)).unwrap();
        assert_eq!(candidate.status, CandidateStatus::Offer);
        assert_eq!(candidate.experience, 3);
        let resume = candidate.resume.unwrap();
        assert_eq!(resume.url, "/api/files/resume/abc");
        assert_eq!(resume.file_name, "");
    }

    #[test]
    fn row_with_unknown_status_is_rejected() {
        let err = Candidate::try_from(row("hired", 3)).unwrap_err();
        assert!(matches!(err, Error::InvalidStatus(ref s) if s == "hired"));
    }

    #[test]
    fn row_with_negative_experience_is_rejected() {
        assert!(Candidate::try_from(row("applied", -1)).is_err());
    }
}
