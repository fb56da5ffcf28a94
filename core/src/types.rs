/// Single coordinate axis used for the grid size and for row/column positions.
///
/// Signed so that positions decoded from user input (which may land left of or
/// above the grid) can be represented and rejected by bounds checks.
pub type Coord = i32;

/// Count type used for mine counts and cell totals.
pub type CellCount = i32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Callers must have bounds-checked the coordinates first.
    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

/// `a * b` widened so that large sizes do not overflow.
pub const fn mult(a: Coord, b: Coord) -> i64 {
    (a as i64) * (b as i64)
}

const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains inside a
/// `size` x `size` grid.
fn apply_delta(coords: Coord2, delta: Coord2, size: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;

    let next_row = row.checked_add(dr)?;
    if !(0..size).contains(&next_row) {
        return None;
    }

    let next_col = col.checked_add(dc)?;
    if !(0..size).contains(&next_col) {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the up to 8 edge- and corner-sharing neighbours of a cell.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, size: Coord) -> Self {
        Self {
            center,
            size,
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

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.size);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), 4).collect();

        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((1, 1), 3).count(), 8);
    }

    #[test]
    fn edge_does_not_wrap_around() {
        let neighbors: Vec<_> = NeighborIter::new((3, 1), 4).collect();

        assert_eq!(neighbors, [(2, 0), (2, 1), (2, 2), (3, 0), (3, 2)]);
    }
}
