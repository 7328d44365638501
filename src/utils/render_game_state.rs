//! Terminal-oriented Unicode board renderer.
//!
//! Rows are the label letters (`A` on top), columns are the digits `1..8`
//! left to right. Empty squares are shaded light/dark; squares listed in
//! `highlight` are drawn as `*` so a drag's drop targets are visible.

use crate::game_state::chess_types::{Color, Coordinate, PieceKind, SquareLabel};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::{coordinate_to_label, is_dark_square};

const HEADER: &str = "  1 2 3 4 5 6 7 8";

pub fn render_game_state(game_state: &GameState) -> String {
    render_with_highlights(game_state, &[])
}

pub fn render_with_highlights(game_state: &GameState, highlight: &[SquareLabel]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for row in 0..8u8 {
        let letter = char::from(b'A' + row);
        out.push(letter);
        out.push(' ');

        for column in 0..8u8 {
            let coordinate = Coordinate::new(row, column);
            out.push(square_glyph(game_state, coordinate, highlight));
            if column < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(letter);
        out.push('\n');
    }

    out.push_str(HEADER);
    out
}

fn square_glyph(game_state: &GameState, coordinate: Coordinate, highlight: &[SquareLabel]) -> char {
    if let Some(piece) = game_state
        .grid()
        .get(coordinate)
        .and_then(|id| game_state.piece(id))
    {
        return piece_to_unicode(piece.color(), piece.kind());
    }

    let highlighted = coordinate_to_label(coordinate).is_some_and(|label| highlight.contains(&label));
    if highlighted {
        '*'
    } else if is_dark_square(coordinate) {
        '░'
    } else {
        '·'
    }
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
