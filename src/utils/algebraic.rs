//! Conversions between square labels (e.g. `D4`) and numeric coordinates.
//!
//! The column letter `A..H` maps to the coordinate row `0..7` and the digit
//! `1..8` maps to the coordinate column `0..7`. Both directions fail closed:
//! malformed or out-of-range input yields `None`, never a partial value.

use crate::game_state::chess_types::{Coordinate, SquareLabel};

/// Convert a label such as `"D4"` to a coordinate.
#[inline]
pub fn label_to_coordinate(label: &str) -> Option<Coordinate> {
    SquareLabel::parse(label).map(SquareLabel::coordinate)
}

/// Convert a coordinate to its label. `None` when either component is
/// outside `0..=7`.
#[inline]
pub fn coordinate_to_label(coordinate: Coordinate) -> Option<SquareLabel> {
    if !coordinate.is_on_board() {
        return None;
    }

    Some(SquareLabel::from_coordinate_unchecked(coordinate))
}

/// Board shading: a square is dark when `row + column` is odd.
#[inline]
pub fn is_dark_square(coordinate: Coordinate) -> bool {
    (coordinate.row as u16 + coordinate.column as u16) % 2 == 1
}

/// Every on-board coordinate in row-major order.
pub fn all_coordinates() -> impl Iterator<Item = Coordinate> {
    (0..8u8).flat_map(|row| (0..8u8).map(move |column| Coordinate::new(row, column)))
}
