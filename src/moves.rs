use crate::types::{file_of, rank_of, PieceType, Square};

const FILES: &[u8; 8] = b"abcdefgh";

/// A generated move, carrying everything needed to undo it again.
///
/// `captured` is the signed mailbox code of the removed piece (for en
/// passant, the code of the captured pawn). `prev_castling` and
/// `prev_ep_file` are snapshotted by `Board::make_move`, so a move made
/// exactly once owns its own unmake information and no separate undo
/// stack exists.
#[derive(Debug, Clone, Copy)]
pub struct Move {
  pub from: Square,
  pub to: Square,
  pub captured: i8,
  pub promotion: Option<PieceType>,
  pub is_en_passant: bool,
  pub is_castling: bool,
  pub prev_castling: u8,
  pub prev_ep_file: Option<u8>,
}

impl Move {
  pub fn new(
    from: Square,
    to: Square,
    captured: i8,
    promotion: Option<PieceType>,
    is_en_passant: bool,
    is_castling: bool,
  ) -> Move {
    Move {
      from,
      to,
      captured,
      promotion,
      is_en_passant,
      is_castling,
      prev_castling: 0,
      prev_ep_file: None,
    }
  }

  pub fn quiet(from: Square, to: Square) -> Move {
    Move::new(from, to, 0, None, false, false)
  }

  /// True if both moves describe the same action on the board. The undo
  /// snapshot is deliberately ignored, so killer and PV lookups match
  /// freshly generated moves.
  pub fn same_action(&self, other: &Move) -> bool {
    self.from == other.from && self.to == other.to && self.promotion == other.promotion
  }

  pub fn is_capture(&self) -> bool {
    self.captured != 0 || self.is_en_passant
  }

  /// Long algebraic form, e.g. "e2e4" or "a7a8q".
  pub fn uci(&self) -> String {
    let mut s = String::with_capacity(5);
    s.push(FILES[file_of(self.from) as usize] as char);
    s.push((b'1' + rank_of(self.from)) as char);
    s.push(FILES[file_of(self.to) as usize] as char);
    s.push((b'1' + rank_of(self.to)) as char);
    if let Some(promo) = self.promotion {
      s.push(match promo {
        PieceType::Queen => 'q',
        PieceType::Rook => 'r',
        PieceType::Bishop => 'b',
        PieceType::Knight => 'n',
        _ => unreachable!(),
      });
    }
    s
  }
}
