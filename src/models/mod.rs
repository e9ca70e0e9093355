pub mod analytics;
pub mod candidate;
pub mod filter;
