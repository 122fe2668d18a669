//! Board model - the state owned by the widget and the operations on it.
//!
//! Every entry point that can change what is on screen returns `true` when
//! a repaint is needed; the view turns that into `cx.notify()`.

use gpui::{Bounds, Pixels, Point};
use log::{debug, warn};
use shakmaty::{Piece, Square};

use crate::config::BoardConfig;
use crate::domain::{
    BoardEvent, BoardState, DragState, GestureTracker, Highlight, HighlightSet, Orientation,
    PositionError,
};
use crate::models::listeners::{ChessActionListener, ListenerId, ListenerRegistry, deliver};
use crate::ui::board_layout::BoardLayout;

/// Debounce for the flip key: one toggle per press, however long it is held
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyLatch {
    handled: bool,
}

impl KeyLatch {
    /// Returns true the first time the key goes down after a release
    pub fn press(&mut self) -> bool {
        if self.handled {
            return false;
        }
        self.handled = true;
        true
    }

    pub fn release(&mut self) {
        self.handled = false;
    }
}

/// The main board model containing all widget state
pub struct BoardModel {
    position: BoardState,
    highlights: HighlightSet,
    orientation: Orientation,
    gesture: GestureTracker,
    listeners: ListenerRegistry,
    flip_latch: KeyLatch,
    /// Measured surface bounds from canvas
    pub surface: Bounds<Pixels>,
    margin: f32,
}

impl BoardModel {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            position: BoardState::new(),
            highlights: HighlightSet::new(),
            orientation: Orientation::default(),
            gesture: GestureTracker::new(),
            listeners: ListenerRegistry::new(),
            flip_latch: KeyLatch::default(),
            surface: BoardLayout::default().surface,
            margin: config.margin,
        }
    }

    /// Layout for the currently measured surface
    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.surface, self.margin)
    }

    // -- position --

    pub fn position(&self) -> &BoardState {
        &self.position
    }

    /// Replace the position. A malformed string leaves the board untouched.
    pub fn set_position(&mut self, fen: &str) -> bool {
        match self.try_set_position(fen) {
            Ok(()) => true,
            Err(e) => {
                warn!("ignoring position {:?}: {}", fen, e);
                false
            }
        }
    }

    /// Like `set_position`, but hands the parse error to the caller
    pub fn try_set_position(&mut self, fen: &str) -> Result<(), PositionError> {
        self.position.set_position(fen)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.piece_at(square)
    }

    pub fn set_piece_at(&mut self, square: Square, piece: Piece) {
        self.position.set_piece_at(square, piece);
    }

    pub fn clear_piece_at(&mut self, square: Square) -> Option<Piece> {
        self.position.clear_piece_at(square)
    }

    // -- highlights --

    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    pub fn add_highlight(&mut self, highlight: impl Into<Highlight>) {
        self.highlights.add(highlight.into());
    }

    pub fn remove_highlight(&mut self, highlight: impl Into<Highlight>) -> bool {
        self.highlights.remove(highlight.into())
    }

    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    // -- orientation --

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn flip_board(&mut self) {
        self.orientation = self.orientation.toggled();
        debug!("board flipped, orientation now {:?}", self.orientation);
    }

    /// Flip key pressed. Held keys and presses during a drag are ignored.
    pub fn flip_key_down(&mut self) -> bool {
        if self.gesture.is_dragging() || !self.flip_latch.press() {
            return false;
        }
        self.flip_board();
        true
    }

    pub fn flip_key_up(&mut self) {
        self.flip_latch.release();
    }

    // -- listeners --

    pub fn subscribe(&mut self, listener: Box<dyn ChessActionListener>) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver an event to every listener, in registration order.
    /// Called from inside a listener, the event is queued and delivered
    /// once the current one has reached everyone.
    pub fn emit(&mut self, event: BoardEvent) {
        debug!("board event: {}", event.describe());
        if self.listeners.is_dispatching() {
            self.listeners.enqueue(event);
            return;
        }
        let mut next = Some(event);
        while let Some(event) = next {
            let mut active = self.listeners.begin_dispatch();
            for (id, listener) in active.iter_mut() {
                if self.listeners.is_removed(*id) {
                    continue;
                }
                deliver(listener.as_mut(), self, &event);
            }
            self.listeners.end_dispatch(active);
            next = self.listeners.next_pending();
        }
    }

    // -- pointer input --

    pub fn drag_state(&self) -> Option<&DragState> {
        self.gesture.drag_state()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Primary button pressed at a window position
    pub fn pointer_down(&mut self, position: Point<Pixels>) -> bool {
        let layout = self.layout();
        let (x, y) = layout.to_local(position);
        let square = layout.square_at(position, self.orientation);
        let piece = square.and_then(|sq| self.piece_at(sq));

        match self.gesture.press(square, piece, x, y) {
            Some(event) => {
                self.emit(event);
                true
            }
            None => false,
        }
    }

    /// Pointer moved to a window position
    pub fn pointer_move(&mut self, position: Point<Pixels>) -> bool {
        let (x, y) = self.layout().to_local(position);
        self.gesture.move_to(x, y)
    }

    /// Primary button released at a window position
    pub fn pointer_up(&mut self, position: Point<Pixels>) -> bool {
        if !self.gesture.is_dragging() {
            return false;
        }
        let square = self.layout().square_at(position, self.orientation);
        if let Some(event) = self.gesture.release(square) {
            self.emit(event);
        }
        true
    }

    /// Pointer left the render surface
    pub fn pointer_exit(&mut self) -> bool {
        match self.gesture.exit() {
            Some(event) => {
                self.emit(event);
                true
            }
            None => false,
        }
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}
