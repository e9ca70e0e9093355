//! Candidate persistence seam.
//!
//! The pipeline engine never talks to storage; the orchestrator reads and
//! writes through [`CandidateStore`]. Writes are last-write-wins: two
//! recruiters saving the same candidate concurrently end with whichever
//! `save` landed second.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::candidate::{Candidate, NewCandidate};

pub use memory::MemoryCandidateStore;
pub use postgres::PgCandidateStore;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Every candidate, newest application first.
    async fn list_all(&self) -> Result<Vec<Candidate>>;

    /// Fails with `NotFound` when no candidate has this id.
    async fn get_one(&self, id: Uuid) -> Result<Candidate>;

    /// Upserts by id.
    async fn save(&self, candidate: &Candidate) -> Result<Candidate>;

    /// Persists a new candidate and assigns its id.
    async fn create(&self, candidate: NewCandidate) -> Result<Candidate>;
}
