//! Crate root module declarations for the Plum board engine.
//!
//! The engine answers two questions for a board UI: where may this piece go,
//! and what happens when it is dropped there. Layers, leaves first: value
//! types and the occupancy grid (`game_state`), movement rules (`moves`),
//! target generation and board mutation (`move_generation`), grab/drop
//! handling (`interaction`) and text rendering plus a random play harness
//! (`utils`).

pub mod errors;

pub mod game_state {
    pub mod chess_types;
    pub mod game_state;
    pub mod occupancy_grid;
    pub mod piece;
}

pub mod moves {
    pub mod fixed_offsets;
    pub mod move_rules;
    pub mod ray_scanner;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod move_generator;
}

pub mod interaction {
    pub mod drag_controller;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_play_harness;
    pub mod render_game_state;
}
