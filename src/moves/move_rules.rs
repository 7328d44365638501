//! Per-kind movement rules.
//!
//! Sliders carry a direction set for the ray scanner, leapers carry an offset
//! table for the fixed-offset enumerator. Pawns have no rule yet and always
//! produce an empty target set.

use crate::game_state::chess_types::{Direction, PieceKind};
use crate::moves::fixed_offsets::{KING_OFFSETS, KNIGHT_OFFSETS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRule {
    Slide(&'static [Direction]),
    Leap(&'static [(i8, i8)]),
    Stationary,
}

pub const fn move_rule(kind: PieceKind) -> MoveRule {
    match kind {
        PieceKind::Queen => MoveRule::Slide(&Direction::ALL),
        PieceKind::Rook => MoveRule::Slide(&Direction::ORTHOGONAL),
        PieceKind::Bishop => MoveRule::Slide(&Direction::DIAGONAL),
        PieceKind::King => MoveRule::Leap(&KING_OFFSETS),
        PieceKind::Knight => MoveRule::Leap(&KNIGHT_OFFSETS),
        PieceKind::Pawn => MoveRule::Stationary,
    }
}
