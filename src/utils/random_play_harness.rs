//! Seeded random play over the grab/drop interface.
//!
//! Places a starting layout, then repeatedly grabs a random movable piece and
//! drops it on a random highlighted square. Useful for smoke testing the
//! engine end to end and for eyeballing the renderer.

use log::{info, warn};
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::interaction::drag_controller::{DragController, EventOutcome, InputEvent};
use crate::utils::render_game_state::render_game_state;

/// Back row order along the digits `1..8`.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPlayConfig {
    pub max_moves: u32,
    pub seed: u64,
    /// Put pawns in front of both back rows. They never move but they block.
    pub with_pawns: bool,
}

impl Default for RandomPlayConfig {
    fn default() -> Self {
        Self {
            max_moves: 40,
            seed: 7,
            with_pawns: true,
        }
    }
}

impl RandomPlayConfig {
    /// Set an option by name. `Seed` also accepts `random`.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        match name.to_ascii_lowercase().as_str() {
            "maxmoves" => {
                self.max_moves = value
                    .parse()
                    .map_err(|_| format!("invalid MaxMoves value: {value}"))?;
            }
            "seed" => {
                self.seed = if value.eq_ignore_ascii_case("random") {
                    rand::random()
                } else {
                    value
                        .parse()
                        .map_err(|_| format!("invalid Seed value: {value}"))?
                };
            }
            "pawns" => {
                self.with_pawns = match value.to_ascii_lowercase().as_str() {
                    "true" | "on" | "1" => true,
                    "false" | "off" | "0" => false,
                    _ => return Err(format!("invalid Pawns value: {value}")),
                };
            }
            _ => return Err(format!("unknown option: {name}")),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RandomPlayReport {
    pub moves_applied: u32,
    pub rejected_drops: u32,
    /// True when play ended early because no piece had a legal target.
    pub stalled: bool,
    pub move_log: Vec<String>,
    pub final_board: String,
}

/// Light pieces on row `A`, dark pieces on row `H`, pawns on `B`/`G` when
/// enabled.
pub fn starting_layout(with_pawns: bool) -> GameState {
    let mut game = GameState::new_empty();

    for (color, back, front) in [(Color::Light, 'A', 'B'), (Color::Dark, 'H', 'G')] {
        for (column, kind) in BACK_ROW.iter().enumerate() {
            place_new_piece(&mut game, *kind, color, &format!("{back}{}", column + 1));
        }
        if with_pawns {
            for column in 1..=8 {
                place_new_piece(&mut game, PieceKind::Pawn, color, &format!("{front}{column}"));
            }
        }
    }

    game
}

fn place_new_piece(game: &mut GameState, kind: PieceKind, color: Color, label: &str) {
    let id = game.add_piece(kind, color);
    if !game.place_piece(id, label) {
        warn!("starting layout could not place {kind} {id} on {label}");
        debug_assert!(false, "starting layout placement failed for {label}");
    }
}

/// Play up to `config.max_moves` random grab/drop pairs from the starting
/// layout and report what happened.
pub fn run_random_play(config: &RandomPlayConfig) -> RandomPlayReport {
    let mut game = starting_layout(config.with_pawns);
    let mut controller = DragController::new();
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut report = RandomPlayReport {
        moves_applied: 0,
        rejected_drops: 0,
        stalled: false,
        move_log: Vec::new(),
        final_board: String::new(),
    };

    for _ in 0..config.max_moves {
        let movable = game.movable_pieces();
        let Some(&piece) = movable.choose(&mut rng) else {
            report.stalled = true;
            break;
        };

        let targets = match controller.handle(&mut game, InputEvent::PieceGrabbed(piece)) {
            Ok(EventOutcome::Highlight(targets)) => targets,
            _ => {
                controller.cancel();
                continue;
            }
        };
        let Some(target) = targets.choose(&mut rng) else {
            controller.cancel();
            continue;
        };

        let from = game.piece(piece).and_then(|p| p.position());
        match controller.handle(&mut game, InputEvent::SquareDropped(target.to_string())) {
            Ok(_) => {
                report.moves_applied += 1;
                if let (Some(piece), Some(from)) = (game.piece(piece), from) {
                    report
                        .move_log
                        .push(format!("{} {}{}", piece.kind(), from, target));
                }
            }
            Err(err) => {
                warn!("random play drop rejected: {err}");
                report.rejected_drops += 1;
            }
        }
    }

    info!(
        "random play finished: {} moves, {} rejected, stalled={}",
        report.moves_applied, report.rejected_drops, report.stalled
    );
    report.final_board = render_game_state(&game);
    report
}
