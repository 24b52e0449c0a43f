/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Flat cell key produced by [`encode_hash_key`].
pub type HashKey = u16;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Maps `(row, col)` to the flat key `row * cols + col`.
///
/// Pure arithmetic, no bounds checking; the mapping is bijective only while
/// `col < cols`, and decoding must use the same `cols`.
pub const fn encode_hash_key((row, col): Coord2, cols: Coord) -> HashKey {
    (row as HashKey) * (cols as HashKey) + (col as HashKey)
}

/// Inverse of [`encode_hash_key`] for the same `cols`.
pub const fn decode_hash_key(key: HashKey, cols: Coord) -> Coord2 {
    let cols = cols as HashKey;
    ((key / cols) as Coord, (key % cols) as Coord)
}

/// Returns an iterator over the in-bounds neighbors of `center` on a board of
/// `bounds` size, walking N, NW, NE, S, SW, SE, W, E.
pub fn neighbors(center: Coord2, bounds: Coord2) -> NeighborIter {
    NeighborIter::new(center, bounds)
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (1, 0),
    (1, -1),
    (1, 1),
    (0, -1),
    (0, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
