//! Ray casting for sliding pieces.
//!
//! Each direction is walked independently from the origin. A ray stops at the
//! board edge or just before the first occupied square; the occupied square
//! itself is never reported. Result order is not significant.

use crate::game_state::chess_types::{Coordinate, Direction, SquareLabel};
use crate::game_state::occupancy_grid::OccupancyGrid;
use crate::utils::algebraic::coordinate_to_label;

/// Append the free squares along every direction in `directions`.
///
/// An off-board origin produces nothing.
pub fn scan_rays(
    grid: &OccupancyGrid,
    origin: Coordinate,
    directions: &[Direction],
    out: &mut Vec<SquareLabel>,
) {
    if !origin.is_on_board() {
        return;
    }

    for &direction in directions {
        trace_ray(grid, origin, direction, out);
    }
}

/// Append the free squares along a single direction.
///
/// An off-board origin produces nothing, even when the direction points back
/// onto the board.
pub fn trace_ray(
    grid: &OccupancyGrid,
    origin: Coordinate,
    direction: Direction,
    out: &mut Vec<SquareLabel>,
) {
    if !origin.is_on_board() {
        return;
    }

    let (d_row, d_column) = direction.step();
    let mut current = origin;

    while let Some(next) = current.offset(d_row, d_column) {
        if grid.is_occupied(next) {
            break;
        }
        let Some(label) = coordinate_to_label(next) else {
            break;
        };
        out.push(label);
        current = next;
    }
}
