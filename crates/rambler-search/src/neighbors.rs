use rambler_core::{Coord, Range};

/// Unit steps in north, south, west, east order.
const DIRS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Orthogonal neighbors of `p` that lie inside `bounds`.
///
/// Enumeration order is north, south, west, east, which fixes the order in
/// which successors are handed to the search engine.
pub fn cardinal_neighbors(p: Coord, bounds: Range) -> impl Iterator<Item = Coord> {
    DIRS.into_iter()
        .filter_map(move |(dx, dy)| p.checked_shift(dx, dy))
        .filter(move |&n| bounds.contains(n))
}
