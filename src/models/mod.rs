pub mod board;
pub mod listeners;

pub use board::{BoardModel, KeyLatch};
pub use listeners::{ChessActionListener, FnListener, ListenerId, ListenerRegistry};
