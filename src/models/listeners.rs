//! Listener registry for board gestures.
//!
//! Listeners are called synchronously in registration order and get
//! mutable access to the board so they can react right away, e.g. by
//! highlighting target squares or applying an accepted move.

use std::collections::VecDeque;

use shakmaty::{Piece, Square};

use crate::domain::BoardEvent;
use crate::models::BoardModel;

/// Receiver of board gesture notifications
pub trait ChessActionListener {
    /// A piece was lifted. Useful for marking possible target squares.
    fn picked_up(&mut self, board: &mut BoardModel, piece: Piece, from: Square);

    /// A piece was dropped on a square other than its origin
    fn move_attempt(&mut self, board: &mut BoardModel, piece: Piece, from: Square, to: Square);

    /// The drag ended without a move
    fn aborted(&mut self, board: &mut BoardModel);
}

/// Adapter turning a single closure into a listener
pub struct FnListener<F>(pub F);

impl<F> ChessActionListener for FnListener<F>
where
    F: FnMut(&mut BoardModel, &BoardEvent),
{
    fn picked_up(&mut self, board: &mut BoardModel, piece: Piece, from: Square) {
        (self.0)(board, &BoardEvent::PickedUp { piece, from });
    }

    fn move_attempt(&mut self, board: &mut BoardModel, piece: Piece, from: Square, to: Square) {
        (self.0)(board, &BoardEvent::MoveAttempt { piece, from, to });
    }

    fn aborted(&mut self, board: &mut BoardModel) {
        (self.0)(board, &BoardEvent::Aborted);
    }
}

/// Route an event to the matching listener callback
pub(crate) fn deliver(
    listener: &mut dyn ChessActionListener,
    board: &mut BoardModel,
    event: &BoardEvent,
) {
    match *event {
        BoardEvent::PickedUp { piece, from } => listener.picked_up(board, piece, from),
        BoardEvent::MoveAttempt { piece, from, to } => listener.move_attempt(board, piece, from, to),
        BoardEvent::Aborted => listener.aborted(board),
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub(crate) type ListenerEntry = (ListenerId, Box<dyn ChessActionListener>);

/// Ordered set of listeners
///
/// While an event is being dispatched the entries are moved out so the
/// listeners can borrow the board mutably. Subscriptions made during that
/// window are appended after the dispatch; unsubscriptions are recorded
/// and applied once it ends. Only one dispatch runs at a time: events
/// emitted from inside a listener wait in `pending`.
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: u64,
    entries: Vec<ListenerEntry>,
    in_flight: Vec<ListenerId>,
    removed_in_flight: Vec<ListenerId>,
    dispatching: bool,
    pending: VecDeque<BoardEvent>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Box<dyn ChessActionListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns false if the id is unknown or already removed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        if let Some(index) = self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            self.entries.remove(index);
            return true;
        }
        if self.in_flight.contains(&id) && !self.removed_in_flight.contains(&id) {
            self.removed_in_flight.push(id);
            return true;
        }
        false
    }

    pub fn len(&self) -> usize {
        self.entries.len() + self.in_flight.len() - self.removed_in_flight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn is_removed(&self, id: ListenerId) -> bool {
        self.removed_in_flight.contains(&id)
    }

    pub(crate) fn is_dispatching(&self) -> bool {
        self.dispatching
    }

    /// Hold an event until the running dispatch has finished
    pub(crate) fn enqueue(&mut self, event: BoardEvent) {
        self.pending.push_back(event);
    }

    pub(crate) fn next_pending(&mut self) -> Option<BoardEvent> {
        self.pending.pop_front()
    }

    pub(crate) fn begin_dispatch(&mut self) -> Vec<ListenerEntry> {
        self.dispatching = true;
        let active = std::mem::take(&mut self.entries);
        self.in_flight = active.iter().map(|(id, _)| *id).collect();
        active
    }

    pub(crate) fn end_dispatch(&mut self, mut active: Vec<ListenerEntry>) {
        let removed = std::mem::take(&mut self.removed_in_flight);
        self.in_flight.clear();
        active.retain(|(id, _)| !removed.contains(id));
        active.append(&mut self.entries);
        self.entries = active;
        self.dispatching = false;
    }
}
