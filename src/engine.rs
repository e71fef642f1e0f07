use std::fmt::{self, Display};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::utils::{is_playable_cell, midpoint};

/// Column `i`, row `j`. Playable range is `[0, 8)` on both axes; values
/// outside it are representable so that off-board arithmetic stays total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub i: i8,
    pub j: i8,
}

impl Coordinate {
    pub fn new(i: i8, j: i8) -> Coordinate {
        Coordinate { i, j }
    }

    pub fn offset(self, di: i8, dj: i8) -> Coordinate {
        Coordinate {
            i: self.i + di,
            j: self.j + dj,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    pub fn opposite(self) -> Side {
        if self == Side::Red {
            Side::Black
        } else {
            Side::Red
        }
    }

    /// Row a man of this side promotes on: red advances toward row 0,
    /// black toward row 7.
    pub fn terminus_row(self) -> i8 {
        match self {
            Side::Red => 0,
            Side::Black => 7,
        }
    }
}

impl Default for Side {
    fn default() -> Self {
        Side::Red
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "red"),
            Side::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
}

/** Direction tables. Order is fixed: red's forward pair, then black's
forward pair; kings walk all four in the same order. Move generation
iterates these as written, which keeps its output deterministic. */
const RED_MAN_DIRS: &[(i8, i8)] = &[(1, -1), (-1, -1)];
const BLACK_MAN_DIRS: &[(i8, i8)] = &[(-1, 1), (1, 1)];
const KING_DIRS: &[(i8, i8)] = &[(1, -1), (-1, -1), (-1, 1), (1, 1)];

impl Piece {
    pub fn new(side: Side, rank: Rank) -> Piece {
        Piece { side, rank }
    }

    pub fn man(side: Side) -> Piece {
        Piece::new(side, Rank::Man)
    }

    pub fn directions(&self) -> &'static [(i8, i8)] {
        match (self.rank, self.side) {
            (Rank::King, _) => KING_DIRS,
            (Rank::Man, Side::Red) => RED_MAN_DIRS,
            (Rank::Man, Side::Black) => BLACK_MAN_DIRS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Move {
    /** where from, where to */
    Step(Coordinate, Coordinate),
    /** where from, where to, whom is being captured */
    Jump(Coordinate, Coordinate, Coordinate),
}

impl Move {
    pub fn origin(&self) -> Coordinate {
        match self {
            Move::Step(from, _) => *from,
            Move::Jump(from, _, _) => *from,
        }
    }

    pub fn destination(&self) -> Coordinate {
        match self {
            Move::Step(_, to) => *to,
            Move::Jump(_, to, _) => *to,
        }
    }

    pub fn captured(&self) -> Option<Coordinate> {
        match self {
            Move::Step(_, _) => None,
            Move::Jump(_, _, target) => Some(*target),
        }
    }

    pub fn is_jump(&self) -> bool {
        matches!(self, Move::Jump(..))
    }
}

/// 8×8 cell array, indexed `[j][i]`. The grid is the sole owner of the
/// pieces; a piece is addressed by the coordinate of its cell.
#[derive(Clone, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Option<Piece>; 8]; 8],
}

impl Grid {
    pub fn new() -> Grid {
        Grid {
            cells: [[None; 8]; 8],
        }
    }

    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        coord.i < 0 || coord.j < 0 || coord.i >= 8 || coord.j >= 8
    }

    /// Total: out-of-range coordinates simply hold no piece.
    pub fn get(&self, coord: Coordinate) -> Option<Piece> {
        if self.is_out_of_bounds(coord) {
            None
        } else {
            self.cells[coord.j as usize][coord.i as usize]
        }
    }

    /// Unconditional write; every caller goes through bounds-checked
    /// logic first.
    pub fn set(&mut self, coord: Coordinate, occupant: Option<Piece>) {
        self.cells[coord.j as usize][coord.i as usize] = occupant;
    }

    /// Occupied cells in row-major order.
    pub fn iter_pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        (0..8i8)
            .flat_map(|j| (0..8i8).map(move |i| Coordinate::new(i, j)))
            .filter_map(move |coord| self.get(coord).map(|piece| (coord, piece)))
    }

    /// Legal moves of the piece at `coord`, directions probed in table
    /// order. A piece that can jump must jump: if any direction yields a
    /// jump, the plain steps are discarded.
    pub fn piece_moves(&self, coord: Coordinate) -> Vec<Move> {
        let Some(piece) = self.get(coord) else {
            return Vec::new();
        };
        let mut steps = Vec::with_capacity(4);
        let mut jumps = Vec::with_capacity(4);
        for &(di, dj) in piece.directions() {
            let adj = coord.offset(di, dj);
            match self.get(adj) {
                None if !self.is_out_of_bounds(adj) => steps.push(Move::Step(coord, adj)),
                Some(other) if other.side != piece.side => {
                    let landing = coord.offset(2 * di, 2 * dj);
                    if !self.is_out_of_bounds(landing) && self.get(landing).is_none() {
                        jumps.push(Move::Jump(coord, landing, adj));
                    }
                }
                _ => (),
            }
        }
        if jumps.is_empty() {
            steps
        } else {
            jumps
        }
    }

    /// Pieces of `side` that may be selected this turn, row-major. If any
    /// of them has a jump available, the set narrows to exactly those
    /// with jumps, even though the others have legal moves in isolation.
    pub fn movable_pieces(&self, side: Side) -> Vec<Coordinate> {
        let mut movable = Vec::new();
        let mut any_jump = false;
        for (coord, piece) in self.iter_pieces() {
            if piece.side != side {
                continue;
            }
            let moves = self.piece_moves(coord);
            if moves.is_empty() {
                continue;
            }
            let has_jump = moves.iter().any(Move::is_jump);
            any_jump |= has_jump;
            movable.push((coord, has_jump));
        }
        if any_jump {
            movable.retain(|&(_, has_jump)| has_jump);
        }
        movable.into_iter().map(|(coord, _)| coord).collect()
    }

    /** Execute ***valid*** move: clear the origin, remove the jumped
    piece if any, place the mover on the destination, promoting it when
    it lands on its terminus row. One transition, no intermediate state. */
    pub fn execute(&mut self, mv: Move) {
        let origin = mv.origin();
        let destination = mv.destination();
        let Some(mut piece) = self.get(origin) else {
            panic!("Trying to move from an empty cell!");
        };
        assert!(
            !self.is_out_of_bounds(destination) && self.get(destination).is_none(),
            "Trying to move in busy place!"
        );
        if let Some(target) = mv.captured() {
            debug_assert_eq!(target, midpoint(origin, destination));
            let captured = self.get(target);
            assert!(
                captured.is_some_and(|captured| captured.side != piece.side),
                "That's a bug! Piece captured a teammate!"
            );
            self.set(target, None);
        }
        if piece.rank == Rank::Man && destination.j == piece.side.terminus_row() {
            trace!("{} man promoted on {:?}", piece.side, destination);
            piece.rank = Rank::King;
        }
        self.set(origin, None);
        self.set(destination, Some(piece));
    }
}

impl Default for Grid {
    /// Starting layout: each side's three back rows, on cells of odd
    /// coordinate parity.
    fn default() -> Self {
        let mut grid = Grid::new();
        for j in 0..8i8 {
            let side = match j {
                0..=2 => Side::Black,
                5..=7 => Side::Red,
                _ => continue,
            };
            for i in 0..8i8 {
                let coord = Coordinate::new(i, j);
                if is_playable_cell(coord) {
                    grid.set(coord, Some(Piece::man(side)));
                }
            }
        }
        grid
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for j in 0..8i8 {
            for i in 0..8i8 {
                let glyph = match self.get(Coordinate::new(i, j)) {
                    None => '.',
                    Some(Piece { side: Side::Red, rank: Rank::Man }) => 'r',
                    Some(Piece { side: Side::Red, rank: Rank::King }) => 'R',
                    Some(Piece { side: Side::Black, rank: Rank::Man }) => 'b',
                    Some(Piece { side: Side::Black, rank: Rank::King }) => 'B',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
