//! Piece record consumed by the move generator and the board mutator.

use crate::game_state::chess_types::{Color, PieceId, PieceKind, SquareLabel};

/// A piece as seen by the engine: identity, kind, color and an optional
/// position.
///
/// The position starts unset. It may be assigned during setup through
/// [`Piece::set_position`]; once the piece is on the board it should only
/// change through [`crate::move_generation::legal_move_apply::apply_move`],
/// which keeps the occupancy grid in step with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    position: Option<SquareLabel>,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceKind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            position: None,
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn position(&self) -> Option<SquareLabel> {
        self.position
    }

    /// Store `label` as the position if it is a well formed square label.
    /// Malformed input leaves the current position untouched and returns
    /// `false`.
    pub fn set_position(&mut self, label: &str) -> bool {
        match SquareLabel::parse(label) {
            Some(square) => {
                self.position = Some(square);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub(crate) fn move_to(&mut self, target: SquareLabel) {
        self.position = Some(target);
    }
}
