use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tweetcast::banding::{SplitOutcome, Winner};
use tweetcast::predict_client::TweetFeatures;
use tweetcast::{BandedMetric, ScoreCard};

#[derive(Debug, Deserialize)]
pub struct ApiPredictRequest {
    pub text: Option<String>,
    pub has_image: Option<bool>,
    pub has_video: Option<bool>,
    pub has_link: Option<bool>,
    pub has_mention: Option<bool>,
    pub has_crypto_mention: Option<bool>,
    pub is_quoting: Option<bool>,
    pub has_poll: Option<bool>,
    pub scheduled_at: Option<String>,
    pub follower_count: Option<u64>,
    pub view_count: Option<u64>,
}

impl ApiPredictRequest {
    pub fn into_features(self, now: DateTime<Utc>) -> Result<TweetFeatures, String> {
        let text = self.text.unwrap_or_default().trim().to_string();
        if text.is_empty() {
            return Err("text is required".to_string());
        }

        let time_posted = match self.scheduled_at.as_deref() {
            Some(raw) if !raw.trim().is_empty() => DateTime::parse_from_rfc3339(raw.trim())
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|err| format!("invalid scheduled_at: {}", err))?,
            _ => now,
        };

        let mut features = TweetFeatures::new(text, time_posted);
        features.has_image = self.has_image.unwrap_or(false);
        features.has_video = self.has_video.unwrap_or(false);
        features.has_link = self.has_link.unwrap_or(false);
        features.has_mention = self.has_mention.unwrap_or(false);
        features.has_crypto_mention = self.has_crypto_mention.unwrap_or(false);
        features.is_quoting = self.is_quoting.unwrap_or(false);
        features.has_poll = self.has_poll.unwrap_or(false);
        features.follower_count = self.follower_count;
        features.view_count = self.view_count;

        Ok(features)
    }
}

#[derive(Debug, Serialize)]
pub struct ApiBandedMetric {
    pub value: u64,
    pub quality: String,
    pub color: String,
}

impl From<BandedMetric> for ApiBandedMetric {
    fn from(metric: BandedMetric) -> Self {
        Self {
            value: metric.value,
            quality: metric.tier.label().to_string(),
            color: metric.tier.tag().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiPredictResponse {
    pub likes: ApiBandedMetric,
    pub retweets: ApiBandedMetric,
    pub replies: ApiBandedMetric,
    pub engagement: ApiBandedMetric,
}

impl ApiPredictResponse {
    pub fn from_card(card: ScoreCard) -> Self {
        Self {
            likes: card.likes.into(),
            retweets: card.retweets.into(),
            replies: card.replies.into(),
            engagement: card.engagement.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiSplitRequest {
    pub tweet_a: ApiPredictRequest,
    pub tweet_b: ApiPredictRequest,
}

#[derive(Debug, Serialize)]
pub struct ApiSplitResponse {
    pub tweet_a: ApiPredictResponse,
    pub tweet_b: ApiPredictResponse,
    pub winner: Winner,
}

impl ApiSplitResponse {
    pub fn from_outcome(outcome: SplitOutcome) -> Self {
        Self {
            tweet_a: ApiPredictResponse::from_card(outcome.card_a),
            tweet_b: ApiPredictResponse::from_card(outcome.card_b),
            winner: outcome.winner,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiLoginResponse {
    pub url: String,
    pub verifier: String,
    pub state: String,
}
