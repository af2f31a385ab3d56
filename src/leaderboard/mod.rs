//! Ranked leaderboard core: composite score encoding, the ordered index,
//! and the service facade tying them together.

use parking_lot::RwLock;
use tracing::debug;

use crate::leaderboard::{
    error::LeaderboardError,
    rank_index::RankedIndex,
    structures::{player_rank_info::PlayerRankInfo, rank_entry::RankEntry}
};

pub mod constants;
pub mod error;
pub mod rank_index;
pub mod score;
pub mod structures;

/// Orchestrates score updates and ranking queries over one shared board.
///
/// The index sits behind a single reader-writer lock: queries take the
/// shared side and run concurrently, mutations take the exclusive side for
/// their short O(log n) critical section. A replace is applied entirely
/// inside the write lock, so no reader ever observes the old entry removed
/// with the new one not yet inserted.
///
/// One instance is constructed by the owning layer and passed by reference
/// into every caller; there is no process-global board.
pub struct LeaderboardService {
    index: RwLock<RankedIndex>,
    max_window: usize
}

impl LeaderboardService {
    pub fn new() -> LeaderboardService {
        LeaderboardService::with_max_window(constants::MAX_WINDOW)
    }

    /// `max_window` caps `before + after` in [`Self::get_player_rank_range`],
    /// independent of any validation the caller performed.
    pub fn with_max_window(max_window: usize) -> LeaderboardService {
        LeaderboardService {
            index: RwLock::new(RankedIndex::new()),
            max_window
        }
    }

    pub fn player_count(&self) -> usize {
        self.index.read().len()
    }

    /// Records a score achieved at `timestamp` (epoch milliseconds, supplied
    /// by the caller; the engine never reads a clock). The latest update for
    /// a player wins, and repeating an identical update leaves the board
    /// unchanged.
    pub fn update_score(&self, player_id: &str, raw_score: f64, timestamp: i64) -> Result<(), LeaderboardError> {
        if player_id.is_empty() {
            return Err(LeaderboardError::InvalidArgument(
                "player id must not be empty".to_string()
            ));
        }

        let key = score::encode(raw_score, timestamp)?;
        let inserted = self.index.write().upsert(player_id, key)?;
        debug!(player_id, raw_score, timestamp, inserted, "score update applied");

        Ok(())
    }

    /// Removes the player from the board entirely.
    pub fn remove_player(&self, player_id: &str) -> Result<(), LeaderboardError> {
        self.index.write().remove(player_id)?;
        debug!(player_id, "player removed from board");

        Ok(())
    }

    /// Current 1-based rank and decoded score of the player.
    pub fn get_player_rank(&self, player_id: &str) -> Result<PlayerRankInfo, LeaderboardError> {
        let index = self.index.read();
        let key = index
            .key_of(player_id)
            .ok_or_else(|| LeaderboardError::NotFound(player_id.to_string()))?;
        let rank = index.rank(player_id)?;

        Ok(PlayerRankInfo {
            player_id: player_id.to_string(),
            rank: rank as u64 + 1,
            score: score::decode(key)
        })
    }

    /// The best `n` players, ranked `1..=min(n, player_count)`. A
    /// non-positive `n` yields an empty view, not an error.
    pub fn get_top_n(&self, n: i64) -> Vec<PlayerRankInfo> {
        if n <= 0 {
            return Vec::new();
        }

        assemble(self.index.read().top_k(n as usize), 1)
    }

    /// The window of the board surrounding the player: up to `before`
    /// entries above them and `after` below. Entries carry their absolute
    /// 1-based ranks, and the window always contains the player.
    pub fn get_player_rank_range(
        &self,
        player_id: &str,
        before: usize,
        after: usize
    ) -> Result<Vec<PlayerRankInfo>, LeaderboardError> {
        let requested = before.saturating_add(after);
        if requested > self.max_window {
            return Err(LeaderboardError::InvalidArgument(format!(
                "window of {} entries exceeds the maximum of {}",
                requested, self.max_window
            )));
        }

        let (start, entries) = self.index.read().range_around(player_id, before, after)?;
        Ok(assemble(entries, start as u64 + 1))
    }
}

impl Default for LeaderboardService {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes raw index entries into player-facing records, numbered with
/// consecutive 1-based ranks starting at `first_rank`.
fn assemble(entries: Vec<RankEntry>, first_rank: u64) -> Vec<PlayerRankInfo> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| PlayerRankInfo {
            player_id: entry.player_id,
            rank: first_rank + i as u64,
            score: score::decode(entry.key)
        })
        .collect()
}
