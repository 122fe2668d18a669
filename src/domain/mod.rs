//! Pure board domain types.
//! No GPUI dependencies - this is the domain layer.

pub mod event;
pub mod gesture;
pub mod highlight;
pub mod orientation;
pub mod position;
pub mod square;

pub use event::BoardEvent;
pub use gesture::{DragState, GestureTracker};
pub use highlight::{Highlight, HighlightSet};
pub use orientation::Orientation;
pub use position::{BoardState, EMPTY_PLACEMENT, PositionError, START_PLACEMENT};
pub use square::{SquareName, SquareParseError, parse_square, square_name};
