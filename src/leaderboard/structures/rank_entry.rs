/// One live entry of the ranked index: a player and the composite key
/// currently backing their board position. Exactly one entry exists per
/// player at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub player_id: String,
    pub key: i128
}
