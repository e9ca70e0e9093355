use icu_collator::{Collator, CollatorOptions, Strength};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::filter::{FilterCriteria, SortKey};

/// Filters and sorts a candidate collection for display.
///
/// Filters run in a fixed order (search, role, experience band) and the
/// surviving candidates are sorted once with a stable sort. The input slice
/// is never modified.
pub fn query(collection: &[Candidate], criteria: &FilterCriteria) -> Vec<Candidate> {
    let needle = criteria.search.to_lowercase();

    let mut result: Vec<Candidate> = collection
        .iter()
        .filter(|c| needle.is_empty() || matches_search(c, &needle))
        .filter(|c| criteria.role.matches(&c.role))
        .filter(|c| criteria.experience.contains(c.experience))
        .cloned()
        .collect();

    sort_candidates(&mut result, criteria.sort);
    result
}

fn matches_search(candidate: &Candidate, needle: &str) -> bool {
    candidate.name.to_lowercase().contains(needle)
        || candidate.email.to_lowercase().contains(needle)
        || candidate.role.to_lowercase().contains(needle)
}

pub fn sort_candidates(candidates: &mut [Candidate], key: SortKey) {
    match key {
        SortKey::NameAsc => candidates.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::NameDesc => candidates.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortKey::ExperienceAsc => candidates.sort_by_key(|c| c.experience),
        SortKey::ExperienceDesc => candidates.sort_by(|a, b| b.experience.cmp(&a.experience)),
        SortKey::NewestFirst => candidates.sort_by(|a, b| b.applied_date.cmp(&a.applied_date)),
        SortKey::OldestFirst => candidates.sort_by_key(|c| c.applied_date),
        SortKey::Unsorted => {}
    }
}

thread_local! {
    static NAME_COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!(error = ?e, "Root collation unavailable, falling back to case-folded order");
                None
            }
        }
    };
}

/// Human ordering for names using the Unicode root collation: accents and
/// case are secondary to the base letters, and a lowercase form sorts ahead
/// of its uppercase twin.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a)),
        })
        .then_with(|| a.cmp(b))
}

/// Distinct role titles present in the collection, in name order.
pub fn distinct_roles(collection: &[Candidate]) -> Vec<String> {
    let roles: BTreeSet<&str> = collection.iter().map(|c| c.role.as_str()).collect();
    let mut roles: Vec<String> = roles.into_iter().map(str::to_string).collect();
    roles.sort_by(|a, b| compare_names(a, b));
    roles
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    pub status: CandidateStatus,
    pub title: &'static str,
    pub count: usize,
    pub candidates: Vec<Candidate>,
}

/// Kanban view: one column per stage, in pipeline order.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineBoard {
    pub columns: Vec<BoardColumn>,
}

impl PipelineBoard {
    pub fn column(&self, status: CandidateStatus) -> Option<&BoardColumn> {
        self.columns.iter().find(|c| c.status == status)
    }
}

/// Splits an already queried sequence into stage columns, keeping its order.
pub fn group_by_status(candidates: Vec<Candidate>) -> PipelineBoard {
    let mut columns: Vec<BoardColumn> = CandidateStatus::ALL
        .iter()
        .map(|status| BoardColumn {
            status: *status,
            title: status.title(),
            count: 0,
            candidates: Vec::new(),
        })
        .collect();

    for candidate in candidates {
        if let Some(column) = columns.iter_mut().find(|c| c.status == candidate.status) {
            column.candidates.push(candidate);
        }
    }
    for column in &mut columns {
        column.count = column.candidates.len();
    }

    PipelineBoard { columns }
}
