// Rule-based resume critique.
// Checks run in a fixed order; the engine concatenates their findings and scores them.

pub mod checks;
pub mod engine;
pub mod handlers;
