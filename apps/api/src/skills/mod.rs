// Skill matching: normalization, alias resolution, gap analysis, job comparison.
// Pure and synchronous. Handlers are the only async code here.

pub mod gap;
pub mod handlers;
pub mod normalize;
