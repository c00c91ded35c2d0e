use tweetcast::banding::{
    compare, engagement_mix, ThresholdTable, Winner, ENGAGEMENT, LIKES, REPLIES, RETWEETS,
};
use tweetcast::{band_counts, RawCounts, Tier};

fn all_tables() -> [(&'static str, ThresholdTable); 4] {
    [
        ("likes", LIKES),
        ("retweets", RETWEETS),
        ("replies", REPLIES),
        ("engagement", ENGAGEMENT),
    ]
}

#[test]
fn boundary_values_take_the_higher_tier() {
    for (name, table) in all_tables() {
        assert_eq!(table.tier_for(table.bad), Tier::Bad, "{}", name);
        assert_eq!(table.tier_for(table.decent), Tier::Decent, "{}", name);
        assert_eq!(table.tier_for(table.very_good), Tier::VeryGood, "{}", name);
        assert_eq!(table.tier_for(table.excellent), Tier::Excellent, "{}", name);

        assert_eq!(table.tier_for(table.bad - 1), Tier::VeryBad, "{}", name);
        assert_eq!(table.tier_for(table.decent - 1), Tier::Bad, "{}", name);
        assert_eq!(table.tier_for(table.very_good - 1), Tier::Decent, "{}", name);
        assert_eq!(
            table.tier_for(table.excellent - 1),
            Tier::VeryGood,
            "{}",
            name
        );
    }
}

#[test]
fn likes_boundary_from_the_live_table() {
    assert_eq!(LIKES.tier_for(3200), Tier::Excellent);
    assert_eq!(LIKES.tier_for(3199), Tier::VeryGood);
}

#[test]
fn zero_is_always_very_bad() {
    for (name, table) in all_tables() {
        assert_eq!(table.tier_for(0), Tier::VeryBad, "{}", name);
    }
}

#[test]
fn tiers_are_monotone_in_the_value() {
    for (name, table) in all_tables() {
        let mut previous = table.tier_for(0);
        for value in 1..=4000u64 {
            let tier = table.tier_for(value);
            assert!(previous <= tier, "{} regressed at {}", name, value);
            previous = tier;
        }
    }
}

#[test]
fn huge_values_stay_excellent() {
    for (_, table) in all_tables() {
        assert_eq!(table.tier_for(u64::MAX), Tier::Excellent);
    }
}

#[test]
fn engagement_mix_is_zero_for_zero_volume() {
    assert_eq!(engagement_mix(&RawCounts::new(0, 0, 0)), 0);

    let card = band_counts(&RawCounts::new(0, 0, 0));
    assert_eq!(card.engagement.value, 0);
    assert_eq!(card.engagement.tier, Tier::VeryBad);
}

#[test]
fn engagement_mix_is_bounded() {
    for likes in [0u64, 1, 50, 5000] {
        for retweets in [0u64, 1, 40, 500] {
            for replies in [0u64, 1, 25, 600] {
                let mix = engagement_mix(&RawCounts::new(likes, retweets, replies));
                assert!(mix <= 100, "mix {} for {}/{}/{}", mix, likes, retweets, replies);
            }
        }
    }
}

#[test]
fn engagement_mix_is_a_share_not_a_magnitude() {
    // All likes: 0.5 * 100 = 50, regardless of scale.
    assert_eq!(engagement_mix(&RawCounts::new(100, 0, 0)), 50);
    assert_eq!(engagement_mix(&RawCounts::new(1_000_000, 0, 0)), 50);
    // All replies: weight 0.2.
    assert_eq!(engagement_mix(&RawCounts::new(0, 0, 10)), 20);
}

#[test]
fn modest_counts_band_bad_across_the_card() {
    let card = band_counts(&RawCounts::new(50, 5, 10));

    assert_eq!(card.likes.tier, Tier::Bad);
    assert_eq!(card.retweets.tier, Tier::Bad);
    assert_eq!(card.replies.tier, Tier::Bad);

    // (50*0.5 + 5*0.3 + 10*0.2) / 65 * 100 = 43.85 -> 44
    assert_eq!(card.engagement.value, 44);
    assert_eq!(card.engagement.tier, Tier::Bad);
}

#[test]
fn excellent_raw_counts_can_still_mix_bad() {
    let card = band_counts(&RawCounts::new(5000, 500, 600));

    assert_eq!(card.likes.tier, Tier::Excellent);
    assert_eq!(card.retweets.tier, Tier::Excellent);
    assert_eq!(card.replies.tier, Tier::Excellent);

    // (2500 + 150 + 120) / 6100 * 100 = 45.41 -> 45
    assert_eq!(card.engagement.value, 45);
    assert_eq!(card.engagement.tier, Tier::Bad);
}

#[test]
fn card_carries_the_raw_values() {
    let card = band_counts(&RawCounts::new(12, 34, 56));
    assert_eq!(card.likes.value, 12);
    assert_eq!(card.retweets.value, 34);
    assert_eq!(card.replies.value, 56);
}

#[test]
fn tier_labels_and_tags_are_fixed() {
    assert_eq!(Tier::Excellent.label(), "Excellent");
    assert_eq!(Tier::VeryGood.label(), "Very Good");
    assert_eq!(Tier::Decent.label(), "Decent");
    assert_eq!(Tier::Bad.label(), "Bad");
    assert_eq!(Tier::VeryBad.label(), "Very Bad");

    assert_eq!(Tier::Excellent.tag(), "bg-purple-500 text-white");
    assert_eq!(Tier::VeryBad.tag(), "bg-red-500 text-white");
}

#[test]
fn split_winner_prefers_higher_volume() {
    let a = RawCounts::new(10, 1, 1);
    let b = RawCounts::new(100, 10, 5);

    let outcome = compare(&a, &b);
    assert_eq!(outcome.winner, Winner::TweetB);
    assert_eq!(compare(&b, &a).winner, Winner::TweetA);
}

#[test]
fn split_volume_tie_falls_back_to_mix() {
    // Same total volume, different mix: all likes beats all replies.
    let likes_heavy = RawCounts::new(10, 0, 0);
    let replies_heavy = RawCounts::new(0, 0, 10);

    assert_eq!(compare(&replies_heavy, &likes_heavy).winner, Winner::TweetB);
    assert_eq!(compare(&likes_heavy, &replies_heavy).winner, Winner::TweetA);
}

#[test]
fn split_full_tie_goes_to_tweet_a() {
    let counts = RawCounts::new(42, 7, 3);
    assert_eq!(compare(&counts, &counts).winner, Winner::TweetA);
}

#[test]
fn split_cards_match_independent_scoring() {
    let a = RawCounts::new(5000, 500, 600);
    let b = RawCounts::new(50, 5, 10);

    let outcome = compare(&a, &b);
    assert_eq!(outcome.card_a, band_counts(&a));
    assert_eq!(outcome.card_b, band_counts(&b));
}
