//! Semantic events produced by pointer gestures on the board.

use shakmaty::{Piece, Square};

use crate::domain::square::SquareName;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    /// A piece was lifted from its square
    PickedUp { piece: Piece, from: Square },
    /// A held piece was dropped on a different square
    MoveAttempt { piece: Piece, from: Square, to: Square },
    /// The drag ended without a move
    Aborted,
}

impl BoardEvent {
    /// Short form used in log lines, e.g. `PE2E4`
    pub fn describe(&self) -> String {
        match self {
            BoardEvent::PickedUp { piece, from } => {
                format!("picked up {}{}", piece.char(), SquareName(*from))
            }
            BoardEvent::MoveAttempt { piece, from, to } => {
                format!("{}{}{}", piece.char(), SquareName(*from), SquareName(*to))
            }
            BoardEvent::Aborted => "aborted".to_string(),
        }
    }
}
