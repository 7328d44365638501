//! Fixed-offset enumeration for leaping pieces.
//!
//! Every offset is evaluated on its own: off-board and occupied candidates
//! are skipped, nothing in between is inspected.

use crate::game_state::chess_types::{Coordinate, SquareLabel};
use crate::game_state::occupancy_grid::OccupancyGrid;
use crate::utils::algebraic::coordinate_to_label;

/// The eight squares around a king, as `(d_row, d_column)`.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The eight knight jumps, as `(d_row, d_column)`.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Append every free, on-board square at one of `offsets` from `origin`.
pub fn enumerate_offsets(
    grid: &OccupancyGrid,
    origin: Coordinate,
    offsets: &[(i8, i8)],
    out: &mut Vec<SquareLabel>,
) {
    if !origin.is_on_board() {
        return;
    }

    for &(d_row, d_column) in offsets {
        let Some(candidate) = origin.offset(d_row, d_column) else {
            continue;
        };
        if grid.is_occupied(candidate) {
            continue;
        }
        if let Some(label) = coordinate_to_label(candidate) {
            out.push(label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{enumerate_offsets, KING_OFFSETS, KNIGHT_OFFSETS};
    use crate::game_state::chess_types::{Coordinate, PieceId};
    use crate::game_state::occupancy_grid::OccupancyGrid;

    #[test]
    fn offsets_are_distinct() {
        for table in [KING_OFFSETS, KNIGHT_OFFSETS] {
            let mut sorted = table.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), 8);
        }
    }

    #[test]
    fn occupied_candidate_is_skipped_without_stopping_others() {
        let mut grid = OccupancyGrid::new_empty();
        grid.set(Coordinate::new(4, 4), Some(PieceId(3)));
        let mut out = Vec::new();
        enumerate_offsets(&grid, Coordinate::new(3, 3), &KING_OFFSETS, &mut out);
        assert_eq!(out.len(), 7);
        assert!(!out.iter().any(|l| *l == "E5"));
    }

    #[test]
    fn corner_drops_off_board_candidates() {
        let grid = OccupancyGrid::new_empty();
        let mut out = Vec::new();
        enumerate_offsets(&grid, Coordinate::new(0, 0), &KNIGHT_OFFSETS, &mut out);
        let mut labels: Vec<String> = out.iter().map(|l| l.to_string()).collect();
        labels.sort();
        assert_eq!(labels, vec!["B3", "C2"]);
    }

    #[test]
    fn off_board_origin_is_empty() {
        let grid = OccupancyGrid::new_empty();
        let mut out = Vec::new();
        enumerate_offsets(&grid, Coordinate::new(3, 12), &KING_OFFSETS, &mut out);
        assert!(out.is_empty());
    }
}
