use serde::Serialize;

use crate::{band_counts, RawCounts, ScoreCard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    TweetA,
    TweetB,
}

#[derive(Debug, Clone, Copy)]
pub struct SplitOutcome {
    pub card_a: ScoreCard,
    pub card_b: ScoreCard,
    pub winner: Winner,
}

/// Scores both drafts independently and picks a winner.
///
/// Higher total raw volume wins; ties fall back to the engagement mix, and a
/// full tie goes to tweet A so the verdict is deterministic.
pub fn compare(a: &RawCounts, b: &RawCounts) -> SplitOutcome {
    let card_a = band_counts(a);
    let card_b = band_counts(b);

    let winner = if b.total() > a.total() {
        Winner::TweetB
    } else if b.total() == a.total() && card_b.engagement.value > card_a.engagement.value {
        Winner::TweetB
    } else {
        Winner::TweetA
    };

    SplitOutcome {
        card_a,
        card_b,
        winner,
    }
}
