use thiserror::Error;

/// Failures while loading a position from the outside world.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN must have 6 fields, got {0}")]
    FieldCount(usize),

    #[error("invalid piece placement near '{0}'")]
    Placement(char),

    #[error("each side needs exactly one king")]
    KingCount,

    #[error("invalid side to move '{0}'")]
    SideToMove(String),

    #[error("invalid castling rights character '{0}'")]
    Castling(char),

    #[error("invalid en passant square '{0}'")]
    EnPassant(String),

    #[error("invalid halfmove clock")]
    HalfmoveClock,

    #[error("invalid fullmove number")]
    FullmoveNumber,
}
