pub mod auth;
pub mod banding;
pub mod config;
pub mod predict_client;

use serde::{Deserialize, Serialize};

use crate::banding::{engagement_mix, ENGAGEMENT, LIKES, REPLIES, RETWEETS};

/// Raw engagement counts returned by the prediction service.
///
/// Counts are unsigned end to end; a negative count in a service response
/// fails deserialization before it can reach the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCounts {
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
}

impl RawCounts {
    pub fn new(likes: u64, retweets: u64, replies: u64) -> Self {
        Self {
            likes,
            retweets,
            replies,
        }
    }

    pub fn total(&self) -> u64 {
        self.likes + self.retweets + self.replies
    }
}

/// Quality band for a single metric, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    VeryBad,
    Bad,
    Decent,
    VeryGood,
    Excellent,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::VeryBad => "Very Bad",
            Tier::Bad => "Bad",
            Tier::Decent => "Decent",
            Tier::VeryGood => "Very Good",
            Tier::Excellent => "Excellent",
        }
    }

    /// Badge style token consumed by the webapp. Purely presentational.
    pub fn tag(self) -> &'static str {
        match self {
            Tier::VeryBad => "bg-red-500 text-white",
            Tier::Bad => "bg-orange-500 text-white",
            Tier::Decent => "bg-emerald-500 text-white",
            Tier::VeryGood => "bg-blue-500 text-white",
            Tier::Excellent => "bg-purple-500 text-white",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandedMetric {
    pub value: u64,
    pub tier: Tier,
}

impl BandedMetric {
    pub fn tag(&self) -> &'static str {
        self.tier.tag()
    }
}

/// The four banded metrics produced for one draft tweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub likes: BandedMetric,
    pub retweets: BandedMetric,
    pub replies: BandedMetric,
    pub engagement: BandedMetric,
}

/// Bands raw counts into the four-metric score card.
///
/// Pure and total: every non-negative input maps to exactly one tier per
/// metric, and zero total volume yields an engagement score of 0 (VeryBad)
/// rather than a division error.
pub fn band_counts(counts: &RawCounts) -> ScoreCard {
    let engagement = engagement_mix(counts);
    ScoreCard {
        likes: BandedMetric {
            value: counts.likes,
            tier: LIKES.tier_for(counts.likes),
        },
        retweets: BandedMetric {
            value: counts.retweets,
            tier: RETWEETS.tier_for(counts.retweets),
        },
        replies: BandedMetric {
            value: counts.replies,
            tier: REPLIES.tier_for(counts.replies),
        },
        engagement: BandedMetric {
            value: engagement,
            tier: ENGAGEMENT.tier_for(engagement),
        },
    }
}

pub fn format_number(value: u64) -> String {
    let mut chars: Vec<char> = value.to_string().chars().collect();
    let mut result = String::new();
    let mut count = 0usize;

    while let Some(ch) = chars.pop() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}
