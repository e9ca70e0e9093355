//! Candidate pipeline engine.
//!
//! Pure, synchronous functions over candidate values: the status state
//! machine, the list query (filter + sort) and the analytics aggregator.
//! Nothing in here touches storage or shared state.

pub mod analytics;
pub mod query;
pub mod transition;

pub use analytics::aggregate;
pub use query::{distinct_roles, group_by_status, query, PipelineBoard};
pub use transition::{is_noop, transition, transition_to};
