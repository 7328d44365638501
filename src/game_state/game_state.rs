//! Board context owning one occupancy grid and the pieces placed on it.
//!
//! Every engine function takes its grid explicitly; `GameState` is the
//! convenience owner used by the drag controller and the random play
//! harness. Independent instances share nothing.

use crate::errors::InteractionError;
use crate::game_state::chess_types::{Color, PieceId, PieceKind, SquareLabel};
use crate::game_state::occupancy_grid::OccupancyGrid;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_apply::{apply_move, place_or_sync};
use crate::move_generation::move_generator::legal_targets;

#[derive(Debug, Clone, Default)]
pub struct GameState {
    grid: OccupancyGrid,
    pieces: Vec<Piece>,
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Read-only view of the grid. Writes go through placement and
    /// [`GameState::apply_move`] only.
    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Register a new, unplaced piece and return its identity.
    pub fn add_piece(&mut self, kind: PieceKind, color: Color) -> PieceId {
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(Piece::new(id, kind, color));
        id
    }

    /// Piece registered under `id`, placed or not.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0 as usize)
    }

    /// All registered pieces in registration order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Piece standing on `label`, if any.
    pub fn piece_on(&self, label: SquareLabel) -> Option<&Piece> {
        self.grid
            .get(label.coordinate())
            .and_then(|id| self.piece(id))
    }

    /// Setup-time placement: set the position and sync it into the grid.
    ///
    /// Only pieces without a position can be placed; once on the board a
    /// piece moves through [`GameState::apply_move`] alone. Returns `false`
    /// when the label is malformed, the piece is unknown or already placed,
    /// or another piece stands on the square.
    pub fn place_piece(&mut self, id: PieceId, label: &str) -> bool {
        let Some(square) = SquareLabel::parse(label) else {
            return false;
        };
        if self.grid.is_occupied(square.coordinate()) {
            return false;
        }
        let Some(piece) = self.pieces.get_mut(id.0 as usize) else {
            return false;
        };
        if piece.position().is_some() {
            return false;
        }

        piece.set_position(square.as_str()) && place_or_sync(&mut self.grid, piece)
    }

    /// Legal targets of the piece `id`; empty for unknown pieces.
    pub fn legal_targets(&self, id: PieceId) -> Vec<SquareLabel> {
        match self.piece(id) {
            Some(piece) => legal_targets(&self.grid, piece),
            None => Vec::new(),
        }
    }

    /// Move the piece `id` to `target` through the board mutator.
    ///
    /// Unknown pieces and rejected moves leave the game untouched.
    pub fn apply_move(&mut self, id: PieceId, target: &str) -> Result<SquareLabel, InteractionError> {
        let piece = self
            .pieces
            .get_mut(id.0 as usize)
            .ok_or(InteractionError::UnknownPiece(id))?;
        apply_move(&mut self.grid, piece, target).map_err(InteractionError::from)
    }

    /// Pieces that currently have at least one legal target.
    pub fn movable_pieces(&self) -> Vec<PieceId> {
        self.pieces
            .iter()
            .filter(|piece| !legal_targets(&self.grid, piece).is_empty())
            .map(Piece::id)
            .collect()
    }

    /// Check that every placed piece sits in the cell holding its identity and
    /// that no cell refers to a piece recorded elsewhere.
    pub fn check_consistency(&self) -> Result<(), String> {
        for piece in &self.pieces {
            if let Some(position) = piece.position() {
                let occupant = self.grid.get(position.coordinate());
                if occupant != Some(piece.id()) {
                    return Err(format!(
                        "piece {} records {} but that cell holds {:?}",
                        piece.id(),
                        position,
                        occupant
                    ));
                }
            }
        }

        for (coordinate, id) in self.grid.occupied() {
            let recorded = self.piece(id).and_then(Piece::position);
            if recorded.map(SquareLabel::coordinate) != Some(coordinate) {
                return Err(format!("cell {coordinate:?} holds {id} recorded at {recorded:?}"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::errors::{InteractionError, MoveRejection};
    use crate::game_state::chess_types::{Color, PieceId, PieceKind, SquareLabel};

    #[test]
    fn placement_and_lookup() {
        let mut game = GameState::new_empty();
        let queen = game.add_piece(PieceKind::Queen, Color::Dark);
        assert!(game.place_piece(queen, "A8"));

        let a8 = SquareLabel::parse("A8").expect("valid label");
        assert_eq!(game.piece_on(a8).map(|p| p.id()), Some(queen));
        assert!(game.check_consistency().is_ok());
    }

    #[test]
    fn invalid_placement_is_ignored() {
        let mut game = GameState::new_empty();
        let queen = game.add_piece(PieceKind::Queen, Color::Dark);
        assert!(!game.place_piece(queen, "I6"));
        assert_eq!(game.grid().occupied_count(), 0);
        assert!(!game.place_piece(PieceId(42), "A1"));
    }

    #[test]
    fn placement_onto_another_piece_is_refused() {
        let mut game = GameState::new_empty();
        let rook = game.add_piece(PieceKind::Rook, Color::Light);
        let bishop = game.add_piece(PieceKind::Bishop, Color::Dark);
        assert!(game.place_piece(rook, "D4"));
        assert!(!game.place_piece(bishop, "D4"));
        assert_eq!(game.piece(bishop).and_then(|p| p.position()), None);
        assert!(game.check_consistency().is_ok());
    }

    #[test]
    fn placed_piece_cannot_be_placed_again() {
        let mut game = GameState::new_empty();
        let rook = game.add_piece(PieceKind::Rook, Color::Light);
        assert!(game.place_piece(rook, "A1"));
        assert!(!game.place_piece(rook, "H8"));
        assert!(!game.place_piece(rook, "A1"));

        let a1 = SquareLabel::parse("A1").expect("valid label");
        assert_eq!(game.piece_on(a1).map(|p| p.id()), Some(rook));
        assert!(game.piece(rook).and_then(|p| p.position()).is_some_and(|p| p == "A1"));
        assert_eq!(game.grid().occupied_count(), 1);
        assert!(game.check_consistency().is_ok());

        game.apply_move(rook, "H1").expect("H1 is along the rook's line");
        assert!(game.piece(rook).and_then(|p| p.position()).is_some_and(|p| p == "H1"));
    }

    #[test]
    fn moves_route_through_the_mutator() {
        let mut game = GameState::new_empty();
        let knight = game.add_piece(PieceKind::Knight, Color::Light);
        let pawn = game.add_piece(PieceKind::Pawn, Color::Light);
        assert!(game.place_piece(knight, "B1"));
        assert!(game.place_piece(pawn, "C3"));

        let err = game.apply_move(knight, "C3").expect_err("C3 is occupied");
        assert!(matches!(
            err,
            InteractionError::Rejected(MoveRejection::IllegalTarget { .. })
        ));

        game.apply_move(knight, "A3").expect("A3 is free");
        assert!(game.check_consistency().is_ok());
        assert_eq!(game.movable_pieces(), vec![knight]);
    }

    #[test]
    fn unknown_piece_is_reported() {
        let mut game = GameState::new_empty();
        assert_eq!(
            game.apply_move(PieceId(5), "A1"),
            Err(InteractionError::UnknownPiece(PieceId(5)))
        );
        assert!(game.legal_targets(PieceId(5)).is_empty());
    }

    #[test]
    fn independent_games_do_not_share_state() {
        let mut first = GameState::new_empty();
        let second = GameState::new_empty();
        let king = first.add_piece(PieceKind::King, Color::Light);
        assert!(first.place_piece(king, "E1"));
        assert_eq!(first.grid().occupied_count(), 1);
        assert_eq!(second.grid().occupied_count(), 0);
    }
}
