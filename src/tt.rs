use crate::moves::Move;
use crate::zobrist::ZHash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TTFlag {
  Exact,
  Lower, // score is a lower bound (fail-high)
  Upper, // score is an upper bound (fail-low)
}

#[derive(Clone, Copy)]
pub struct TTEntry {
  pub key: ZHash,
  pub depth: u32,
  pub score: i32,
  pub flag: TTFlag,
  pub best_move: Option<Move>,
}

/// Fixed-capacity map from zobrist key to search result. Replacement is
/// always-replace at `key & (capacity - 1)`; colliding positions simply
/// overwrite each other.
pub struct TranspositionTable {
  entries: Vec<Option<TTEntry>>,
  mask: usize,
}

impl TranspositionTable {
  pub fn new(mb_size: usize) -> Self {
    let bytes = mb_size.max(1) * 1024 * 1024;
    let capacity = (bytes / std::mem::size_of::<Option<TTEntry>>()).next_power_of_two();
    Self {
      entries: vec![None; capacity],
      mask: capacity - 1,
    }
  }

  pub fn probe(&self, key: ZHash) -> Option<&TTEntry> {
    match &self.entries[key as usize & self.mask] {
      Some(entry) if entry.key == key => Some(entry),
      _ => None,
    }
  }

  pub fn store(&mut self, key: ZHash, depth: u32, score: i32, flag: TTFlag, best_move: Option<Move>) {
    self.entries[key as usize & self.mask] =
      Some(TTEntry { key, depth, score, flag, best_move });
  }

  pub fn clear(&mut self) {
    self.entries.fill(None);
  }
}
