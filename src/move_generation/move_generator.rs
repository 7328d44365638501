//! Single-ply target generation.
//!
//! Looks up the piece's [`MoveRule`] and hands its origin to the ray scanner
//! or the fixed-offset enumerator. Reads the grid only.

use log::trace;

use crate::game_state::chess_types::SquareLabel;
use crate::game_state::occupancy_grid::OccupancyGrid;
use crate::game_state::piece::Piece;
use crate::moves::fixed_offsets::enumerate_offsets;
use crate::moves::move_rules::{move_rule, MoveRule};
use crate::moves::ray_scanner::scan_rays;

/// Squares `piece` may move to on `grid`, in no particular order.
///
/// An unplaced piece yields an empty set.
pub fn legal_targets(grid: &OccupancyGrid, piece: &Piece) -> Vec<SquareLabel> {
    let mut out = Vec::with_capacity(28);
    generate_legal_targets(grid, piece, &mut out);
    out
}

/// Buffer-reusing form of [`legal_targets`]. `out` is appended to, not
/// cleared.
pub fn generate_legal_targets(grid: &OccupancyGrid, piece: &Piece, out: &mut Vec<SquareLabel>) {
    let Some(position) = piece.position() else {
        return;
    };
    let origin = position.coordinate();
    let before = out.len();

    match move_rule(piece.kind()) {
        MoveRule::Slide(directions) => scan_rays(grid, origin, directions, out),
        MoveRule::Leap(offsets) => enumerate_offsets(grid, origin, offsets, out),
        MoveRule::Stationary => {}
    }

    trace!(
        "{} {} at {} has {} targets",
        piece.kind(),
        piece.id(),
        position,
        out.len() - before
    );
}

/// Whether `target` is among the legal targets of `piece`.
pub fn is_legal_target(grid: &OccupancyGrid, piece: &Piece, target: SquareLabel) -> bool {
    legal_targets(grid, piece).contains(&target)
}
