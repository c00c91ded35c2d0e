use crate::RawCounts;

const LIKE_WEIGHT: f64 = 0.5;
const RETWEET_WEIGHT: f64 = 0.3;
const REPLY_WEIGHT: f64 = 0.2;

/// Weighted share of likes within total engagement volume, rounded to an
/// integer in 0-100. This is a mix-quality indicator, not a magnitude: a
/// tweet with huge raw counts can still score low if replies dominate.
///
/// Zero total volume short-circuits to 0 so the division can never produce
/// NaN.
pub fn engagement_mix(counts: &RawCounts) -> u64 {
    let total = counts.total();
    if total == 0 {
        return 0;
    }

    let weighted = counts.likes as f64 * LIKE_WEIGHT
        + counts.retweets as f64 * RETWEET_WEIGHT
        + counts.replies as f64 * REPLY_WEIGHT;

    // Weights sum to 1, so weighted / total stays in [0, 1].
    (weighted / total as f64 * 100.0).round() as u64
}
