//! 8x8 occupancy state.
//!
//! Each cell is either empty or holds the identity of the piece standing on
//! it. The grid performs no validation of its own; keeping it consistent with
//! piece positions is the board mutator's job.

use crate::game_state::chess_types::{Coordinate, PieceId, BOARD_SIZE};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: [[Option<PieceId>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl OccupancyGrid {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Occupant of `coordinate`. Off-board coordinates read as empty.
    #[inline]
    pub fn get(&self, coordinate: Coordinate) -> Option<PieceId> {
        if !coordinate.is_on_board() {
            return None;
        }
        self.cells[coordinate.row as usize][coordinate.column as usize]
    }

    #[inline]
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate).is_some()
    }

    /// Unconditional write. Off-board coordinates have no cell and are
    /// ignored.
    #[inline]
    pub fn set(&mut self, coordinate: Coordinate, occupant: Option<PieceId>) {
        if !coordinate.is_on_board() {
            return;
        }
        self.cells[coordinate.row as usize][coordinate.column as usize] = occupant;
    }

    /// Iterate over `(coordinate, occupant)` for every occupied cell.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, PieceId)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(column, cell)| {
                cell.map(|id| (Coordinate::new(row as u8, column as u8), id))
            })
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }
}

#[cfg(test)]
mod tests {
    use super::OccupancyGrid;
    use crate::game_state::chess_types::{Coordinate, PieceId};

    #[test]
    fn new_grid_is_empty() {
        let grid = OccupancyGrid::new_empty();
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.get(Coordinate::new(3, 3)), None);
    }

    #[test]
    fn set_then_get_and_clear() {
        let mut grid = OccupancyGrid::new_empty();
        let d4 = Coordinate::new(3, 3);
        grid.set(d4, Some(PieceId(9)));
        assert_eq!(grid.get(d4), Some(PieceId(9)));
        assert!(grid.is_occupied(d4));
        assert_eq!(grid.occupied().collect::<Vec<_>>(), vec![(d4, PieceId(9))]);

        grid.set(d4, None);
        assert!(!grid.is_occupied(d4));
    }

    #[test]
    fn off_board_reads_as_empty_and_writes_are_dropped() {
        let mut grid = OccupancyGrid::new_empty();
        let off = Coordinate::new(8, 2);
        grid.set(off, Some(PieceId(1)));
        assert_eq!(grid.get(off), None);
        assert_eq!(grid.occupied_count(), 0);
    }
}
