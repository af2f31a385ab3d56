use serde::{Deserialize, Serialize};

/// Player-facing view of a board position, produced on query and never
/// stored. `rank` is 1-based; `score` is the decoded raw score with the
/// timestamp tiebreak stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRankInfo {
    pub player_id: String,
    pub rank: u64,
    pub score: i64
}
