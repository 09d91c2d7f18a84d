// Intent analysis: classify a transcript as a job search, a preference
// confirmation, or nothing actionable, then run the jobs query when the
// user asked to see jobs.

pub mod classifier;
pub mod handlers;
pub mod prompts;
pub mod role_mapping;
pub mod search;
