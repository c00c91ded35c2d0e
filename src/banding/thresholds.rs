use crate::Tier;

/// Lower bounds of the Bad, Decent, VeryGood and Excellent bands for one
/// metric. The four boundaries partition `[0, u64::MAX]` into five
/// contiguous closed-open intervals; everything below `bad` is VeryBad.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable {
    pub bad: u64,
    pub decent: u64,
    pub very_good: u64,
    pub excellent: u64,
}

impl ThresholdTable {
    pub const fn new(bad: u64, decent: u64, very_good: u64, excellent: u64) -> Self {
        Self {
            bad,
            decent,
            very_good,
            excellent,
        }
    }

    /// Top-down assignment; a value exactly on a boundary takes the higher
    /// tier.
    pub fn tier_for(&self, value: u64) -> Tier {
        if value >= self.excellent {
            Tier::Excellent
        } else if value >= self.very_good {
            Tier::VeryGood
        } else if value >= self.decent {
            Tier::Decent
        } else if value >= self.bad {
            Tier::Bad
        } else {
            Tier::VeryBad
        }
    }
}

pub const LIKES: ThresholdTable = ThresholdTable::new(35, 141, 438, 3200);

pub const RETWEETS: ThresholdTable = ThresholdTable::new(2, 9, 39, 407);

pub const REPLIES: ThresholdTable = ThresholdTable::new(5, 25, 87, 533);

/// The engagement mix score is already normalized to 0-100, so its table is
/// percentage cutoffs rather than raw volumes.
pub const ENGAGEMENT: ThresholdTable = ThresholdTable::new(30, 60, 75, 90);
