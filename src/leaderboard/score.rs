use crate::leaderboard::{
    constants::{MAX_TIMESTAMP, SCALE},
    error::LeaderboardError
};

/// Packs a raw score and its achievement time into a single ordered key.
///
/// A strictly higher score always yields a strictly higher key regardless of
/// timestamps; among equal scores the earlier timestamp wins. Fractional
/// scores are rounded to the nearest integer before packing, so only
/// integral scores round-trip exactly.
pub fn encode(raw_score: f64, timestamp: i64) -> Result<i128, LeaderboardError> {
    if !raw_score.is_finite() {
        return Err(LeaderboardError::InvalidArgument(format!(
            "score must be finite, got {}",
            raw_score
        )));
    }

    if !(0..=MAX_TIMESTAMP).contains(&timestamp) {
        return Err(LeaderboardError::InvalidArgument(format!(
            "timestamp must be within 0..={}, got {}",
            MAX_TIMESTAMP, timestamp
        )));
    }

    Ok(raw_score.round() as i128 * SCALE - timestamp as i128)
}

/// Recovers the raw score from a composite key, discarding the timestamp.
///
/// The subtracted timestamp is always in `[0, SCALE)`, so taking the ceiling
/// of the division lands back on the encoded score exactly:
/// `decode(encode(s, t)) == s` for every integral `s` and valid `t`.
pub fn decode(key: i128) -> i64 {
    let quotient = key.div_euclid(SCALE);

    if key.rem_euclid(SCALE) == 0 {
        quotient as i64
    } else {
        (quotient + 1) as i64
    }
}
