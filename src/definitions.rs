use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::engine::{Coordinate, Rank, Side};

/// One occupied cell as the renderer sees it. `can_move` is true when the
/// piece is selectable this turn under the forced-capture filter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub side: Side,
    pub rank: Rank,
    pub can_move: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Figure(Figure),
}

/// Status line a frontend can print verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Status {
    Turn(Side),
    Finished(Side),
}

/// The seam between the rule engine and its two collaborators: a renderer
/// reads the snapshot side, an input adapter feeds already-mapped grid
/// coordinates into the mutating side. Every mutating call is total —
/// invalid input is silently ignored, never an error.
pub trait MatchInterface {
    fn current_board(&self) -> Vec<Vec<Cell>>;
    fn cell(&self, coordinate: Coordinate) -> Option<Cell>;
    /// Movable pieces while nothing is selected, otherwise the selected
    /// piece's legal destinations.
    fn highlighted(&self) -> Vec<Coordinate>;
    fn selection(&self) -> Option<Coordinate>;
    fn select(&mut self, coordinate: Coordinate);
    fn move_selected(&mut self, target: Coordinate);
    /// One pointer action: selects when nothing is selected, moves
    /// otherwise.
    fn input(&mut self, coordinate: Coordinate);
    // info
    fn current_player(&self) -> Side;
    fn status(&self) -> Status;
    fn game_ended(&self) -> bool;
    fn winner(&self) -> Option<Side>;
}

// ---
// Implementation block
// ---

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Turn(side) => write!(f, "{side}'s turn"),
            Status::Finished(side) => write!(f, "{side} wins"),
        }
    }
}
