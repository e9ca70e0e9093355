use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::utils::time;

/// Moves a candidate to the stage named by `requested`.
///
/// Any stage may follow any other. Requesting the current stage returns the
/// candidate untouched. An unknown stage name fails with `InvalidStatus`.
pub fn transition(candidate: &Candidate, requested: &str) -> Result<Candidate> {
    let status: CandidateStatus = requested.parse()?;
    Ok(transition_to(candidate, status, time::now()))
}

/// Typed form of [`transition`] with an explicit clock reading.
pub fn transition_to(
    candidate: &Candidate,
    status: CandidateStatus,
    now: DateTime<Utc>,
) -> Candidate {
    if is_noop(candidate, status) {
        return candidate.clone();
    }

    Candidate {
        status,
        // last_updated never precedes applied_date, even with a skewed clock
        last_updated: now.max(candidate.applied_date),
        ..candidate.clone()
    }
}

pub fn is_noop(candidate: &Candidate, status: CandidateStatus) -> bool {
    candidate.status == status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::pipeline::fixtures::{candidate, jan};

    #[test]
    fn same_status_is_a_noop() {
        let c = candidate("Alice Johnson", "Frontend Developer", 3, CandidateStatus::Interview, 15);
        let moved = transition(&c, "interview").unwrap();
        assert_eq!(moved, c);
        assert_eq!(moved.last_updated, c.last_updated);
    }

    #[test]
    fn every_status_is_reachable_from_every_status() {
        for from in CandidateStatus::ALL {
            let c = candidate("Bob Smith", "Backend Developer", 5, from, 10);
            for to in CandidateStatus::ALL {
                let moved = transition(&c, to.as_str()).unwrap();
                assert_eq!(moved.status, to);
                assert_eq!(moved.id, c.id);
                assert_eq!(moved.name, c.name);
                assert_eq!(moved.applied_date, c.applied_date);
            }
        }
    }

    #[test]
    fn reversed_decisions_are_allowed() {
        let offer = candidate("David Brown", "Backend Developer", 7, CandidateStatus::Offer, 12);
        let back = transition_to(&offer, CandidateStatus::Applied, jan(20));
        assert_eq!(back.status, CandidateStatus::Applied);
        assert_eq!(back.last_updated, jan(20));

        let rejected = candidate("Eve Davis", "QA Engineer", 1, CandidateStatus::Rejected, 8);
        let revived = transition_to(&rejected, CandidateStatus::Interview, jan(21));
        assert_eq!(revived.status, CandidateStatus::Interview);
    }

    #[test]
    fn unknown_status_is_rejected_and_candidate_kept() {
        let c = candidate("Carol White", "UX Designer", 2, CandidateStatus::Applied, 5);
        let before = c.clone();
        let err = transition(&c, "bogus").unwrap_err();
        assert!(matches!(err, Error::InvalidStatus(ref s) if s == "bogus"));
        assert_eq!(c, before);
    }

    #[test]
    fn last_updated_never_precedes_applied_date() {
        let c = candidate("Carol White", "UX Designer", 2, CandidateStatus::Applied, 5);
        let moved = transition_to(&c, CandidateStatus::Offer, jan(1));
        assert_eq!(moved.last_updated, c.applied_date);
    }
}
