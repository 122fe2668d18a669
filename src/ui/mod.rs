pub mod atlas;
pub mod board_layout;
pub mod components;
pub mod display;
pub mod theme;
pub mod view_models;
pub mod views;

pub use atlas::PieceAtlas;
pub use board_layout::BoardLayout;
