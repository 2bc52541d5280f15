// Projects: CRUD, lifecycle transitions (complete/abandon) and stats.

pub mod handlers;
pub mod lifecycle;
pub mod validation;
