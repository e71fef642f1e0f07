use crate::engine::Coordinate;

/// Taxicab distance between two cells. A step covers 2, a jump covers 4.
pub fn distance(from: Coordinate, to: Coordinate) -> i8 {
    (from.i - to.i).abs() + (from.j - to.j).abs()
}

/// Cell jumped over by a capture from `from` to `to`.
pub fn midpoint(from: Coordinate, to: Coordinate) -> Coordinate {
    Coordinate::new((from.i + to.i) / 2, (from.j + to.j) / 2)
}

/// Pieces only ever occupy cells of odd coordinate parity.
pub fn is_playable_cell(coord: Coordinate) -> bool {
    (coord.i + coord.j).rem_euclid(2) == 1
}
