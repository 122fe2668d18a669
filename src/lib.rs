//! Interactive chessboard widget for gpui.
//!
//! Renders a board from a FEN piece-placement string, lets the user drag
//! pieces with the mouse and reports pick-ups, move attempts and aborts to
//! registered listeners. Rules and legality are left to the listeners.

pub mod app;
pub mod config;
pub mod domain;
pub mod models;
pub mod ui;

pub use config::BoardConfig;
pub use domain::{BoardEvent, BoardState, Highlight, Orientation, PositionError};
pub use models::{BoardModel, ChessActionListener, FnListener, ListenerId};
pub use ui::PieceAtlas;
pub use ui::views::ChessBoardView;
