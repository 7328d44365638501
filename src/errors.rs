//! Errors surfaced by the board mutator and the drag controller.
//!
//! Neither is fatal. A rejected move leaves the grid and the piece exactly as
//! they were; callers decide whether to show a message or snap the piece back.

use thiserror::Error;

use crate::game_state::chess_types::{PieceId, PieceKind, SquareLabel};

/// Why `apply_move` refused a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    /// The piece has no recorded position, so it has no legal targets.
    #[error("piece {0} has not been placed on the board")]
    PieceNotPlaced(PieceId),

    /// The target is not a square label.
    #[error("malformed target square: {0:?}")]
    MalformedTarget(String),

    /// The target is well formed but not reachable from the piece's square.
    #[error("{kind} {piece} cannot move from {from} to {target}")]
    IllegalTarget {
        piece: PieceId,
        kind: PieceKind,
        from: SquareLabel,
        target: SquareLabel,
    },
}

/// Failures of the grab/drop event flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    #[error("square dropped with no piece grabbed")]
    NoPieceGrabbed,

    #[error("unknown piece {0}")]
    UnknownPiece(PieceId),

    #[error(transparent)]
    Rejected(#[from] MoveRejection),
}
