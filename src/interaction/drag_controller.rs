//! Grab/drop input handling for a UI collaborator.
//!
//! The controller remembers which piece is being dragged so the engine never
//! has to. A grab returns the squares to highlight; a drop turns into a
//! validated `apply_move` and always ends the drag, accepted or not.

use log::debug;

use crate::errors::InteractionError;
use crate::game_state::chess_types::{PieceId, SquareLabel};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    PieceGrabbed(PieceId),
    SquareDropped(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Drag started; these are the squares the piece may be dropped on.
    Highlight(Vec<SquareLabel>),
    /// Drop accepted, piece now stands on this square.
    Moved { piece: PieceId, to: SquareLabel },
}

#[derive(Debug, Default)]
pub struct DragController {
    grabbed: Option<PieceId>,
}

impl DragController {
    /// Controller with nothing grabbed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Piece currently being dragged, if any.
    #[inline]
    pub fn grabbed(&self) -> Option<PieceId> {
        self.grabbed
    }

    /// Feed one input event.
    ///
    /// A grab records the piece and returns its drop targets. A drop applies
    /// the move for the grabbed piece and clears the grab whether or not the
    /// move is accepted.
    pub fn handle(
        &mut self,
        game: &mut GameState,
        event: InputEvent,
    ) -> Result<EventOutcome, InteractionError> {
        match event {
            InputEvent::PieceGrabbed(id) => {
                if game.piece(id).is_none() {
                    return Err(InteractionError::UnknownPiece(id));
                }
                self.grabbed = Some(id);
                let targets = game.legal_targets(id);
                debug!("grabbed {id}, {} drop targets", targets.len());
                Ok(EventOutcome::Highlight(targets))
            }
            InputEvent::SquareDropped(label) => {
                let id = self.grabbed.take().ok_or(InteractionError::NoPieceGrabbed)?;
                let to = game.apply_move(id, &label)?;
                Ok(EventOutcome::Moved { piece: id, to })
            }
        }
    }

    /// Abandon the current drag without moving anything.
    pub fn cancel(&mut self) {
        self.grabbed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{DragController, EventOutcome, InputEvent};
    use crate::errors::{InteractionError, MoveRejection};
    use crate::game_state::chess_types::{Color, PieceId, PieceKind};
    use crate::game_state::game_state::GameState;

    fn game_with_king() -> (GameState, PieceId) {
        let mut game = GameState::new_empty();
        let king = game.add_piece(PieceKind::King, Color::Light);
        assert!(game.place_piece(king, "A1"));
        (game, king)
    }

    #[test]
    fn grab_highlights_then_drop_moves() {
        let (mut game, king) = game_with_king();
        let mut controller = DragController::new();

        let outcome = controller
            .handle(&mut game, InputEvent::PieceGrabbed(king))
            .expect("known piece");
        let EventOutcome::Highlight(mut targets) = outcome else {
            panic!("grab should highlight");
        };
        targets.sort();
        let labels: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
        assert_eq!(labels, vec!["A2", "B1", "B2"]);
        assert_eq!(controller.grabbed(), Some(king));

        let outcome = controller
            .handle(&mut game, InputEvent::SquareDropped("B2".to_owned()))
            .expect("B2 is legal");
        assert!(matches!(outcome, EventOutcome::Moved { piece, to } if piece == king && to == "B2"));
        assert_eq!(controller.grabbed(), None);
    }

    #[test]
    fn rejected_drop_still_ends_the_drag() {
        let (mut game, king) = game_with_king();
        let mut controller = DragController::new();
        controller
            .handle(&mut game, InputEvent::PieceGrabbed(king))
            .expect("known piece");

        let err = controller
            .handle(&mut game, InputEvent::SquareDropped("C3".to_owned()))
            .expect_err("C3 is two squares away");
        assert!(matches!(
            err,
            InteractionError::Rejected(MoveRejection::IllegalTarget { .. })
        ));
        assert_eq!(controller.grabbed(), None);
        assert!(game.piece(king).and_then(|p| p.position()).is_some_and(|p| p == "A1"));
    }

    #[test]
    fn drop_without_grab_is_an_error() {
        let (mut game, _) = game_with_king();
        let mut controller = DragController::new();
        assert_eq!(
            controller.handle(&mut game, InputEvent::SquareDropped("A2".to_owned())),
            Err(InteractionError::NoPieceGrabbed)
        );
    }

    #[test]
    fn grabbing_unknown_piece_is_an_error() {
        let (mut game, _) = game_with_king();
        let mut controller = DragController::new();
        assert_eq!(
            controller.handle(&mut game, InputEvent::PieceGrabbed(PieceId(77))),
            Err(InteractionError::UnknownPiece(PieceId(77)))
        );
        assert_eq!(controller.grabbed(), None);
    }

    #[test]
    fn cancel_forgets_the_grab() {
        let (mut game, king) = game_with_king();
        let mut controller = DragController::new();
        controller
            .handle(&mut game, InputEvent::PieceGrabbed(king))
            .expect("known piece");
        controller.cancel();
        assert_eq!(controller.grabbed(), None);
    }
}
