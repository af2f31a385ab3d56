use thiserror::Error;

/// Outcome taxonomy for every leaderboard operation. Absence of a player is
/// an expected result every caller handles, never a panic; `Internal` means
/// the index structures disagree and signals a defect rather than misuse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeaderboardError {
    #[error("player not found: {0}")]
    NotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("internal error: {0}")]
    Internal(String)
}
