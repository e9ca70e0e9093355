use std::collections::BTreeMap;

use crate::models::analytics::{AnalyticsSnapshot, StatusCounts};
use crate::models::candidate::Candidate;

/// How many candidates the recent applications list carries.
pub const RECENT_APPLICATIONS_LIMIT: usize = 5;

/// Summarises a candidate collection. Total over every input, including empty.
pub fn aggregate(collection: &[Candidate]) -> AnalyticsSnapshot {
    let mut by_status = StatusCounts::default();
    let mut by_role: BTreeMap<String, usize> = BTreeMap::new();
    let mut experience_sum: u64 = 0;

    for candidate in collection {
        by_status.increment(candidate.status);
        *by_role.entry(candidate.role.clone()).or_insert(0) += 1;
        experience_sum += u64::from(candidate.experience);
    }

    let average_experience = if collection.is_empty() {
        0.0
    } else {
        round_to_tenth(experience_sum as f64 / collection.len() as f64)
    };

    AnalyticsSnapshot {
        total_applications: collection.len(),
        applications_by_status: by_status,
        applications_by_role: by_role,
        average_experience,
        recent_applications: recent_applications(collection, RECENT_APPLICATIONS_LIMIT),
    }
}

/// Newest applications first; equal dates keep their input order.
pub fn recent_applications(collection: &[Candidate], limit: usize) -> Vec<Candidate> {
    let mut recent = collection.to_vec();
    recent.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
    recent.truncate(limit);
    recent
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
