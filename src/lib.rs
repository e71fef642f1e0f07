mod definitions;
mod engine;
mod game;
pub mod utils;

// module re-exports
pub use definitions::{Cell, Figure, MatchInterface, Status};
pub use engine::{Coordinate, Grid, Move, Piece, Rank, Side};
pub use game::Game;
