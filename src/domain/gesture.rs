//! Pick-up / drop state machine.
//!
//! The tracker knows nothing about pixels: callers resolve pointer
//! positions to squares first (see `ui::board_layout`) and pass `None` for
//! positions off the board.

use shakmaty::{Piece, Square};

use crate::domain::event::BoardEvent;

/// State for a piece being dragged
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub piece: Piece,
    pub from: Square,
    /// Pointer position relative to the render surface
    pub mouse_x: f32,
    pub mouse_y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureTracker {
    drag: Option<DragState>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Primary button pressed over `square` holding `piece`.
    ///
    /// Starts a drag only from idle and only when there is a piece to lift.
    pub fn press(
        &mut self,
        square: Option<Square>,
        piece: Option<Piece>,
        mouse_x: f32,
        mouse_y: f32,
    ) -> Option<BoardEvent> {
        if self.drag.is_some() {
            return None;
        }
        let from = square?;
        let piece = piece?;

        self.drag = Some(DragState {
            piece,
            from,
            mouse_x,
            mouse_y,
        });
        Some(BoardEvent::PickedUp { piece, from })
    }

    /// Pointer moved. Returns true if a held piece needs redrawing.
    pub fn move_to(&mut self, mouse_x: f32, mouse_y: f32) -> bool {
        match self.drag.as_mut() {
            Some(drag) => {
                drag.mouse_x = mouse_x;
                drag.mouse_y = mouse_y;
                true
            }
            None => false,
        }
    }

    /// Primary button released over `square`.
    ///
    /// Always ends the drag. Dropping back on the origin aborts; dropping
    /// off the board ends the drag silently.
    pub fn release(&mut self, square: Option<Square>) -> Option<BoardEvent> {
        let drag = self.drag.take()?;
        let to = square?;

        if to == drag.from {
            Some(BoardEvent::Aborted)
        } else {
            Some(BoardEvent::MoveAttempt {
                piece: drag.piece,
                from: drag.from,
                to,
            })
        }
    }

    /// Pointer left the render surface. Aborts an active drag.
    pub fn exit(&mut self) -> Option<BoardEvent> {
        self.drag.take().map(|_| BoardEvent::Aborted)
    }
}
