//! Score aggregation shared by the skill gap analyzer and the resume critic.
//!
//! Raw counts map to a bounded scale through fixed linear penalties/credits.
//! The constants here are part of the public contract: UI copy and tests
//! depend on their literal values.

/// Percentage ceiling for coverage figures.
pub const COVERAGE_MAX: u8 = 100;

/// Points deducted per critical critique issue.
pub const CRITICAL_PENALTY: i32 = 18;
/// Points deducted per warning critique issue.
pub const WARNING_PENALTY: i32 = 8;
/// Lowest score a critique can report.
pub const CRITIQUE_SCORE_FLOOR: i32 = 15;
/// Highest score a critique can report.
pub const CRITIQUE_SCORE_CEILING: i32 = 100;

/// `round(100 * covered / total)`, clamped to [0, 100].
///
/// An empty list is vacuously fully covered and yields 100.
pub fn coverage_percent(covered: usize, total: usize) -> u8 {
    if total == 0 {
        return COVERAGE_MAX;
    }
    let pct = (100.0 * covered as f64 / total as f64).round();
    pct.clamp(0.0, COVERAGE_MAX as f64) as u8
}

/// `clamp(100 - 18 * critical - 8 * warning, 15, 100)`.
///
/// Info-level findings never reach this function.
pub fn critique_score(critical: usize, warning: usize) -> u8 {
    let critical = i32::try_from(critical).unwrap_or(i32::MAX / CRITICAL_PENALTY);
    let warning = i32::try_from(warning).unwrap_or(i32::MAX / WARNING_PENALTY);
    let raw = CRITIQUE_SCORE_CEILING
        .saturating_sub(critical.saturating_mul(CRITICAL_PENALTY))
        .saturating_sub(warning.saturating_mul(WARNING_PENALTY));
    raw.clamp(CRITIQUE_SCORE_FLOOR, CRITIQUE_SCORE_CEILING) as u8
}
