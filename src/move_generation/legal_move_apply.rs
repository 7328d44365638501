//! Board mutation: setup-time placement and validated move application.
//!
//! These are the only functions that write piece identities into the grid,
//! which keeps each placed piece's recorded position pointing at exactly the
//! cell that holds it.

use log::{debug, warn};

use crate::errors::MoveRejection;
use crate::game_state::chess_types::SquareLabel;
use crate::game_state::occupancy_grid::OccupancyGrid;
use crate::game_state::piece::Piece;
use crate::move_generation::move_generator::legal_targets;

/// Apply `piece -> target` if `target` is one of the piece's legal targets.
///
/// On success the former cell is cleared, the target cell holds the piece and
/// the piece's position is the target. On rejection nothing changes.
pub fn apply_move(
    grid: &mut OccupancyGrid,
    piece: &mut Piece,
    target: &str,
) -> Result<SquareLabel, MoveRejection> {
    let result = validate_move(grid, piece, target);
    let target = match result {
        Ok(target) => target,
        Err(rejection) => {
            warn!("move rejected: {rejection}");
            return Err(rejection);
        }
    };

    if let Some(from) = piece.position() {
        let from = from.coordinate();
        if grid.get(from) == Some(piece.id()) {
            grid.set(from, None);
        }
    }

    grid.set(target.coordinate(), Some(piece.id()));
    let from = piece.position();
    piece.move_to(target);

    debug!(
        "{} {} moved {} -> {}",
        piece.kind(),
        piece.id(),
        from.map_or_else(|| "-".to_owned(), |f| f.to_string()),
        target
    );
    Ok(target)
}

fn validate_move(
    grid: &OccupancyGrid,
    piece: &Piece,
    target: &str,
) -> Result<SquareLabel, MoveRejection> {
    let from = piece
        .position()
        .ok_or(MoveRejection::PieceNotPlaced(piece.id()))?;
    let target = SquareLabel::parse(target)
        .ok_or_else(|| MoveRejection::MalformedTarget(target.to_owned()))?;

    if !legal_targets(grid, piece).contains(&target) {
        return Err(MoveRejection::IllegalTarget {
            piece: piece.id(),
            kind: piece.kind(),
            from,
            target,
        });
    }

    Ok(target)
}

/// Write `piece` into the cell of its recorded position without checking
/// legality. Intended for initial setup. Returns `false` (and does nothing)
/// when the piece has no position.
pub fn place_or_sync(grid: &mut OccupancyGrid, piece: &Piece) -> bool {
    let Some(position) = piece.position() else {
        return false;
    };

    grid.set(position.coordinate(), Some(piece.id()));
    debug!("{} {} placed on {}", piece.kind(), piece.id(), position);
    true
}
