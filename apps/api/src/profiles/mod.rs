// Profiles: saved session constraints (time, energy, season) that
// recommendations are scored against.

pub mod handlers;
pub mod validation;
