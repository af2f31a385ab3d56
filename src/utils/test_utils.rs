use std::collections::HashMap;

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One simulated score submission, timestamped by the caller the way the
/// transport layer would.
#[derive(Debug, Clone)]
pub struct ScoreUpdate {
    pub player_id: String,
    pub score: f64,
    pub timestamp: i64
}

pub fn generate_player_id(n: usize) -> String {
    format!("player-{:05}", n)
}

/// Deterministic feed of score updates: `n_players` distinct players with
/// `updates_per_player` submissions each, on a strictly increasing
/// millisecond clock. Seeded for reproducible results.
///
/// Scores are drawn from a range narrow enough that equal-score collisions
/// occur, which is what exercises the timestamp tiebreak.
pub fn generate_score_feed(n_players: usize, updates_per_player: usize, seed: u64) -> Vec<ScoreUpdate> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut feed = Vec::with_capacity(n_players * updates_per_player);
    let mut timestamp: i64 = 1_000_000;

    for _ in 0..updates_per_player {
        for player in 0..n_players {
            let score = rng.random_range(0..n_players.max(2) as i64) as f64;
            timestamp += rng.random_range(1..50);

            feed.push(ScoreUpdate {
                player_id: generate_player_id(player),
                score,
                timestamp
            });
        }
    }

    feed
}

/// Reference leaderboard computed the slow way: last write per player, then
/// a full sort by score descending, earlier timestamp first, player id
/// last. Tests and benches compare the indexed engine against this.
pub fn naive_leaderboard(feed: &[ScoreUpdate]) -> Vec<(String, i64)> {
    let mut latest: HashMap<&str, &ScoreUpdate> = HashMap::new();
    for update in feed {
        latest.insert(update.player_id.as_str(), update);
    }

    latest
        .values()
        .sorted_by(|a, b| {
            let score_a = a.score.round() as i64;
            let score_b = b.score.round() as i64;

            score_b
                .cmp(&score_a)
                .then_with(|| a.timestamp.cmp(&b.timestamp))
                .then_with(|| a.player_id.cmp(&b.player_id))
        })
        .map(|update| (update.player_id.clone(), update.score.round() as i64))
        .collect()
}
