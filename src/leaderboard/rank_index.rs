use std::{cmp::Ordering, collections::HashMap};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::leaderboard::{error::LeaderboardError, structures::rank_entry::RankEntry};

/// Ordered index over players, best first: descending composite key, with
/// exact key collisions broken by ascending player id so rank queries stay
/// total and reproducible.
///
/// Two structures are kept in sync on every mutation: a size-augmented
/// treap holding the board order, and a player -> key map for O(1)
/// membership and current-key checks. Rank, insert and removal are
/// O(log n); top-k and window scans are O(log n + k).
pub struct RankedIndex {
    root: Option<Box<Node>>,
    players: HashMap<String, i128>,
    priorities: ChaCha8Rng
}

struct Node {
    entry: RankEntry,
    priority: u64,
    size: usize,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>
}

impl Node {
    fn new(entry: RankEntry, priority: u64) -> Box<Node> {
        Box::new(Node {
            entry,
            priority,
            size: 1,
            left: None,
            right: None
        })
    }

    fn update_size(&mut self) {
        self.size = 1 + subtree_size(&self.left) + subtree_size(&self.right);
    }
}

fn subtree_size(node: &Option<Box<Node>>) -> usize {
    node.as_ref().map_or(0, |n| n.size)
}

/// Board order for (key, player_id) against an existing entry: `Less` means
/// the pair ranks strictly better (higher key, then lexically smaller id).
fn board_cmp(key: i128, player_id: &str, entry: &RankEntry) -> Ordering {
    entry
        .key
        .cmp(&key)
        .then_with(|| player_id.cmp(&entry.player_id))
}

fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut pivot = node.left.take().expect("rotate_right requires a left child");
    node.left = pivot.right.take();
    node.update_size();
    pivot.right = Some(node);
    pivot.update_size();
    pivot
}

fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut pivot = node.right.take().expect("rotate_left requires a right child");
    node.right = pivot.left.take();
    node.update_size();
    pivot.left = Some(node);
    pivot.update_size();
    pivot
}

/// BST insert by board order, then rotations restore the max-heap property
/// on priorities. Callers guarantee the entry's player is not yet present.
fn insert(node: Option<Box<Node>>, new_node: Box<Node>) -> Box<Node> {
    let Some(mut n) = node else { return new_node };

    if board_cmp(new_node.entry.key, &new_node.entry.player_id, &n.entry) == Ordering::Less {
        n.left = Some(insert(n.left.take(), new_node));
        n.update_size();
        if n.left.as_ref().map_or(false, |l| l.priority > n.priority) {
            n = rotate_right(n);
        }
    } else {
        n.right = Some(insert(n.right.take(), new_node));
        n.update_size();
        if n.right.as_ref().map_or(false, |r| r.priority > n.priority) {
            n = rotate_left(n);
        }
    }

    n
}

/// Removes the node matching (key, player_id) exactly. Returns the new
/// subtree root and whether a node was removed.
fn remove(node: Option<Box<Node>>, key: i128, player_id: &str) -> (Option<Box<Node>>, bool) {
    let Some(mut n) = node else { return (None, false) };

    match board_cmp(key, player_id, &n.entry) {
        Ordering::Less => {
            let (left, removed) = remove(n.left.take(), key, player_id);
            n.left = left;
            n.update_size();
            (Some(n), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove(n.right.take(), key, player_id);
            n.right = right;
            n.update_size();
            (Some(n), removed)
        }
        Ordering::Equal => (merge(n.left.take(), n.right.take()), true)
    }
}

/// Merges two subtrees where everything in `a` ranks before everything in
/// `b`, keeping priorities heap-ordered.
fn merge(a: Option<Box<Node>>, b: Option<Box<Node>>) -> Option<Box<Node>> {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some(mut a), Some(b)) if a.priority >= b.priority => {
            a.right = merge(a.right.take(), Some(b));
            a.update_size();
            Some(a)
        }
        (a, Some(mut b)) => {
            b.left = merge(a, b.left.take());
            b.update_size();
            Some(b)
        }
    }
}

/// Appends the entries with 0-based positions in `start..=end` to `out`, in
/// board order. `offset` is the rank of the subtree's leftmost entry.
fn collect_range(node: &Option<Box<Node>>, offset: usize, start: usize, end: usize, out: &mut Vec<RankEntry>) {
    let Some(n) = node else { return };
    let position = offset + subtree_size(&n.left);

    if start < position {
        collect_range(&n.left, offset, start, end, out);
    }
    if (start..=end).contains(&position) {
        out.push(n.entry.clone());
    }
    if end > position {
        collect_range(&n.right, position + 1, start, end, out);
    }
}

impl RankedIndex {
    pub fn new() -> RankedIndex {
        RankedIndex {
            root: None,
            players: HashMap::new(),
            // Priorities only shape the tree, never the board order; a fixed
            // seed keeps the structure reproducible across runs.
            priorities: ChaCha8Rng::seed_from_u64(42)
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Current composite key for the player, if ranked. O(1).
    pub fn key_of(&self, player_id: &str) -> Option<i128> {
        self.players.get(player_id).copied()
    }

    /// Inserts the player or replaces their existing entry with the new key.
    /// Old key removal and new key insertion happen within this one call, so
    /// a caller holding exclusive access never exposes a half-applied state.
    /// Returns whether the player is new to the board.
    pub fn upsert(&mut self, player_id: &str, key: i128) -> Result<bool, LeaderboardError> {
        let previous = self.players.get(player_id).copied();

        if let Some(old_key) = previous {
            if old_key == key {
                // Same key, nothing moves.
                return Ok(false);
            }

            let (root, removed) = remove(self.root.take(), old_key, player_id);
            self.root = root;
            if !removed {
                return Err(LeaderboardError::Internal(format!(
                    "player '{}' tracked in the lookup map but absent from the ordered index",
                    player_id
                )));
            }
        }

        let priority = self.priorities.random();
        let entry = RankEntry {
            player_id: player_id.to_string(),
            key
        };
        self.root = Some(insert(self.root.take(), Node::new(entry, priority)));
        self.players.insert(player_id.to_string(), key);

        Ok(previous.is_none())
    }

    /// Deletes the player's entry. Absence is reported as `NotFound`.
    pub fn remove(&mut self, player_id: &str) -> Result<(), LeaderboardError> {
        let key = self
            .players
            .remove(player_id)
            .ok_or_else(|| LeaderboardError::NotFound(player_id.to_string()))?;

        let (root, removed) = remove(self.root.take(), key, player_id);
        self.root = root;
        if !removed {
            return Err(LeaderboardError::Internal(format!(
                "player '{}' tracked in the lookup map but absent from the ordered index",
                player_id
            )));
        }

        Ok(())
    }

    /// 0-based position of the player, best first: the count of entries
    /// ranking strictly better.
    pub fn rank(&self, player_id: &str) -> Result<usize, LeaderboardError> {
        let key = self
            .key_of(player_id)
            .ok_or_else(|| LeaderboardError::NotFound(player_id.to_string()))?;

        self.position_of(key, player_id).ok_or_else(|| {
            LeaderboardError::Internal(format!(
                "player '{}' tracked in the lookup map but absent from the ordered index",
                player_id
            ))
        })
    }

    /// Up to `n` entries from the top of the board, best first. `n` is
    /// clamped to the board size.
    pub fn top_k(&self, n: usize) -> Vec<RankEntry> {
        let count = n.min(self.len());
        if count == 0 {
            return Vec::new();
        }

        let mut out = Vec::with_capacity(count);
        collect_range(&self.root, 0, 0, count - 1, &mut out);
        out
    }

    /// The contiguous board slice surrounding the player: positions
    /// `max(0, r - before) ..= min(len - 1, r + after)` where `r` is the
    /// player's rank. Returns the clamped start position with the entries.
    pub fn range_around(
        &self,
        player_id: &str,
        before: usize,
        after: usize
    ) -> Result<(usize, Vec<RankEntry>), LeaderboardError> {
        let rank = self.rank(player_id)?;
        let start = rank.saturating_sub(before);
        let end = (self.len() - 1).min(rank.saturating_add(after));

        let mut out = Vec::with_capacity(end - start + 1);
        collect_range(&self.root, 0, start, end, &mut out);
        Ok((start, out))
    }

    fn position_of(&self, key: i128, player_id: &str) -> Option<usize> {
        let mut node = self.root.as_deref();
        let mut preceding = 0;

        while let Some(n) = node {
            match board_cmp(key, player_id, &n.entry) {
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Greater => {
                    preceding += subtree_size(&n.left) + 1;
                    node = n.right.as_deref();
                }
                Ordering::Equal => return Some(preceding + subtree_size(&n.left))
            }
        }

        None
    }
}

impl Default for RankedIndex {
    fn default() -> Self {
        Self::new()
    }
}
