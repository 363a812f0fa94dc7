use std::sync::OnceLock;

use crate::board::Board;
use crate::types::Color;

pub type ZHash = u64;

const SEED: u64 = 1_070_373_371_371_371_371;

/// SplitMix64 step; deterministic key generation from the fixed seed.
fn splitmix64(state: &mut u64) -> u64 {
  *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
  let mut z = *state;
  z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
  z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
  z ^ (z >> 31)
}

// holds all the precomputed random numbers for zobrist hashing
pub struct ZobristKeys {
  pub pieces: [[[ZHash; 64]; 2]; 6],
  pub castling: [ZHash; 16],
  pub en_passant_file: [ZHash; 9], // 0..7 per file, 8 for "none"
  pub side_to_move: ZHash,
}

static ZOBRIST_KEYS: OnceLock<ZobristKeys> = OnceLock::new();

impl ZobristKeys {
  fn new() -> Self {
    let mut state = SEED;

    let mut pieces = [[[0; 64]; 2]; 6];
    for piece_keys in pieces.iter_mut() {
      for color_keys in piece_keys.iter_mut() {
        for key in color_keys.iter_mut() {
          *key = splitmix64(&mut state);
        }
      }
    }

    let mut castling = [0; 16];
    for key in castling.iter_mut() {
      *key = splitmix64(&mut state);
    }

    let mut en_passant_file = [0; 9];
    for key in en_passant_file.iter_mut() {
      *key = splitmix64(&mut state);
    }

    let side_to_move = splitmix64(&mut state);

    ZobristKeys { pieces, castling, en_passant_file, side_to_move }
  }
}

/// Returns a reference to the only ZobristKeys instance
pub fn keys() -> &'static ZobristKeys {
  ZOBRIST_KEYS.get_or_init(ZobristKeys::new)
}

/// Full recomputation of the position fingerprint from board state.
pub fn position_key(board: &Board) -> ZHash {
  let keys = keys();
  let mut hash = 0;

  for pt_idx in 0..6 {
    for color in [Color::White, Color::Black] {
      let mut bb = board.pieces[pt_idx] & board.colors[color as usize];
      while bb != 0 {
        let sq = bb.trailing_zeros() as usize;
        hash ^= keys.pieces[pt_idx][color as usize][sq];
        bb &= bb - 1;
      }
    }
  }

  hash ^= keys.castling[board.castling as usize];
  hash ^= keys.en_passant_file[board.ep_file.map_or(8, |f| f as usize)];
  if board.side_to_move == Color::Black {
    hash ^= keys.side_to_move;
  }

  hash
}

/// True when the latest position in `history` has occurred at least three
/// times, counting that latest occurrence.
pub fn is_threefold_repetition(history: &[ZHash]) -> bool {
  match history.last() {
    Some(&current) => history.iter().filter(|&&h| h == current).count() >= 3,
    None => false,
  }
}
