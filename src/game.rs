use log::debug;

use crate::definitions::{Cell, Figure, MatchInterface, Status};
use crate::engine::{Coordinate, Grid, Move, Side};

/// Turn and selection state machine. Owns the grid for the life of the
/// game; one externally triggered action is processed to completion
/// before the next is accepted.
pub struct Game {
    grid: Grid,
    current_player: Side,
    selected: Option<Coordinate>,
    /// Forced-capture-filtered selectable pieces; recomputed whenever the
    /// selection is cleared.
    movable: Vec<Coordinate>,
    /// Cached legal moves of the selected piece.
    destinations: Vec<Move>,
    winner: Option<Side>,
}

impl Game {
    pub fn new(grid: Grid) -> Game {
        Game::with_player(grid, Side::Red)
    }

    pub fn with_player(grid: Grid, player: Side) -> Game {
        let movable = grid.movable_pieces(player);
        let winner = if movable.is_empty() {
            Some(player.opposite())
        } else {
            None
        };
        Game {
            grid,
            current_player: player,
            selected: None,
            movable,
            destinations: Vec::new(),
            winner,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn end_turn(&mut self) {
        self.selected = None;
        self.destinations.clear();
        self.current_player = self.current_player.opposite();
        self.movable = self.grid.movable_pieces(self.current_player);
        if self.movable.is_empty() {
            let winner = self.current_player.opposite();
            debug!("{} has no movable piece, {} wins", self.current_player, winner);
            self.winner = Some(winner);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Grid::default())
    }
}

impl MatchInterface for Game {
    fn current_board(&self) -> Vec<Vec<Cell>> {
        let mut board = Vec::with_capacity(8);
        for j in 0..8i8 {
            let mut row = Vec::with_capacity(8);
            for i in 0..8i8 {
                let coord = Coordinate::new(i, j);
                row.push(match self.grid.get(coord) {
                    None => Cell::Empty,
                    Some(piece) => Cell::Figure(Figure {
                        side: piece.side,
                        rank: piece.rank,
                        can_move: self.movable.contains(&coord),
                    }),
                });
            }
            board.push(row);
        }
        board
    }

    fn cell(&self, coordinate: Coordinate) -> Option<Cell> {
        if self.grid.is_out_of_bounds(coordinate) {
            return None;
        }
        Some(match self.grid.get(coordinate) {
            None => Cell::Empty,
            Some(piece) => Cell::Figure(Figure {
                side: piece.side,
                rank: piece.rank,
                can_move: self.movable.contains(&coordinate),
            }),
        })
    }

    fn highlighted(&self) -> Vec<Coordinate> {
        if self.selected.is_some() {
            self.destinations.iter().map(Move::destination).collect()
        } else {
            self.movable.clone()
        }
    }

    fn selection(&self) -> Option<Coordinate> {
        self.selected
    }

    fn select(&mut self, coordinate: Coordinate) {
        if self.winner.is_some() || self.selected.is_some() {
            return;
        }
        if !self.movable.contains(&coordinate) {
            return;
        }
        self.destinations = self.grid.piece_moves(coordinate);
        self.selected = Some(coordinate);
        debug!("{} selected {:?}", self.current_player, coordinate);
    }

    fn move_selected(&mut self, target: Coordinate) {
        let Some(selected) = self.selected else {
            return;
        };
        let Some(mv) = self
            .destinations
            .iter()
            .copied()
            .find(|mv| mv.destination() == target)
        else {
            return;
        };
        self.grid.execute(mv);
        debug!("{} moved {:?} to {:?}", self.current_player, selected, target);
        if mv.is_jump() {
            // Chain continuation: the turn holds while the same piece,
            // with whatever rank it now has, can jump again.
            let continuation = self.grid.piece_moves(target);
            if continuation.iter().any(Move::is_jump) {
                self.selected = Some(target);
                self.destinations = continuation;
                self.movable = vec![target];
                return;
            }
        }
        self.end_turn();
    }

    fn input(&mut self, coordinate: Coordinate) {
        if self.selected.is_none() {
            self.select(coordinate);
        } else {
            self.move_selected(coordinate);
        }
    }

    fn current_player(&self) -> Side {
        self.current_player
    }

    fn status(&self) -> Status {
        match self.winner {
            Some(winner) => Status::Finished(winner),
            None => Status::Turn(self.current_player),
        }
    }

    fn game_ended(&self) -> bool {
        self.winner.is_some()
    }

    fn winner(&self) -> Option<Side> {
        self.winner
    }
}
