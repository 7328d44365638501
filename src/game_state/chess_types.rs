//! Core value types shared by the occupancy grid, move rules and the board
//! mutator.
//!
//! A square has two spellings: the human-readable [`SquareLabel`] (`"D4"`)
//! and the zero-based [`Coordinate`]. The letter selects the row and the
//! digit selects the column.

use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

/// Piece kind (color is carried separately on the piece record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// Opaque piece identity stored in occupied grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Zero-based `(row, column)` pair.
///
/// Fields are public so callers can build arbitrary values; anything outside
/// `0..8` is simply treated as off-board by the rest of the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: u8,
    pub column: u8,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.column < BOARD_SIZE
    }

    /// Shift by `(d_row, d_column)`, returning `None` when the result leaves
    /// the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Coordinate> {
        let row = self.row as i16 + d_row as i16;
        let column = self.column as i16 + d_column as i16;
        if !(0..BOARD_SIZE as i16).contains(&row) || !(0..BOARD_SIZE as i16).contains(&column) {
            return None;
        }
        Some(Coordinate::new(row as u8, column as u8))
    }
}

/// Validated two-character square label such as `"D4"`.
///
/// Only constructible through [`SquareLabel::parse`] or from an on-board
/// [`Coordinate`], so a held value is always well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquareLabel([u8; 2]);

impl SquareLabel {
    /// Parse `"A1"`..`"H8"`. Lowercase letters are rejected.
    pub fn parse(label: &str) -> Option<SquareLabel> {
        let bytes = label.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let (letter, digit) = (bytes[0], bytes[1]);
        if !(b'A'..=b'H').contains(&letter) || !(b'1'..=b'8').contains(&digit) {
            return None;
        }

        Some(SquareLabel([letter, digit]))
    }

    #[inline]
    pub(crate) const fn from_coordinate_unchecked(coordinate: Coordinate) -> SquareLabel {
        SquareLabel([b'A' + coordinate.row, b'1' + coordinate.column])
    }

    #[inline]
    pub const fn coordinate(self) -> Coordinate {
        Coordinate::new(self.0[0] - b'A', self.0[1] - b'1')
    }

    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII by construction.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for SquareLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for SquareLabel {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Unit step used by the ray scanner, as `(d_row, d_column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    #[inline]
    pub const fn step(self) -> (i8, i8) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (1, -1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (-1, 1),
        }
    }
}
