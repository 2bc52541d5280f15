// Recommendation engine: ranks active projects against a saved profile.
// Scoring is pure; the handler owns loading and error mapping.

pub mod handlers;
pub mod scoring;
