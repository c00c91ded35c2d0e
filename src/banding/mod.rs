pub mod engagement;
pub mod split;
pub mod thresholds;

pub use engagement::engagement_mix;
pub use split::{compare, SplitOutcome, Winner};
pub use thresholds::{ThresholdTable, ENGAGEMENT, LIKES, REPLIES, RETWEETS};
