//! Services: validation, shaping and logging around the repos. Each method
//! takes the store handle and returns `AppError` with an operation-specific
//! message for store failures.

pub mod players;
pub mod practice_teams;
pub mod rounds;
