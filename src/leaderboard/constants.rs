// Composite key constants.
// The key packs (score, timestamp) into one ordered i128 as
// round(score) * SCALE - timestamp. SCALE must stay strictly greater than
// MAX_TIMESTAMP or a one-point score difference no longer dominates the
// timestamp tiebreak.
pub const TIMESTAMP_BITS: u32 = 44;
pub const SCALE: i128 = 1 << TIMESTAMP_BITS;
pub const MAX_TIMESTAMP: i64 = (1 << TIMESTAMP_BITS) - 1;

// Largest `before + after` window accepted by rank-range queries.
pub const MAX_WINDOW: usize = 100;
