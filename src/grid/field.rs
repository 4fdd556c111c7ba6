//! The playing field: a fixed-size grid of cells.
//!
//! Backed by a persistent vector so cloning a field is O(1) and updates
//! share structure with prior snapshots.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Coord};
use crate::core::Side;

/// Fixed-size board, row-major.
///
/// Dimensions never change after construction. Cell updates go through
/// [`Field::set`], which keys on the coordinate the new cell carries, so
/// a cell can never land at a position other than its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    width: u32,
    height: u32,
    cells: Vector<Cell>,
}

impl Field {
    /// Create a field with every square owned by the native side.
    ///
    /// Panics on zero-sized dimensions.
    #[must_use]
    pub fn all_native(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "field dimensions must be positive");

        let mut cells = Vector::new();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push_back(Cell::native(Coord::new(x, y)));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Field width in squares.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Field height in squares.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the field holds no squares. Never the case for a
    /// constructed field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether a coordinate lies on the board.
    #[must_use]
    pub const fn in_bounds(&self, at: Coord) -> bool {
        at.x >= 0 && at.x < self.width as i32 && at.y >= 0 && at.y < self.height as i32
    }

    fn index(&self, at: Coord) -> usize {
        at.y as usize * self.width as usize + at.x as usize
    }

    /// The cell at a coordinate, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<&Cell> {
        if self.in_bounds(at) {
            self.cells.get(self.index(at))
        } else {
            None
        }
    }

    /// Replace the cell at the coordinate the new cell carries.
    ///
    /// Panics if that coordinate is off the board; callers only hold
    /// coordinates that came from this field.
    pub fn set(&mut self, cell: Cell) {
        let at = cell.coord();
        assert!(self.in_bounds(at), "cell {at} out of bounds");
        let idx = self.index(at);
        self.cells.set(idx, cell);
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of squares owned by a side.
    #[must_use]
    pub fn count_owned_by(&self, side: Side) -> u32 {
        self.iter().filter(|c| c.owner() == Some(side)).count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InstanceId;

    #[test]
    fn test_all_native() {
        let field = Field::all_native(7, 10);

        assert_eq!(field.width(), 7);
        assert_eq!(field.height(), 10);
        assert_eq!(field.len(), 70);
        assert!(field.iter().all(|c| matches!(c, Cell::Native { .. })));
        assert_eq!(field.count_owned_by(Side::Native), 70);
        assert_eq!(field.count_owned_by(Side::Alien), 0);
    }

    #[test]
    fn test_in_bounds() {
        let field = Field::all_native(7, 10);

        assert!(field.in_bounds(Coord::new(0, 0)));
        assert!(field.in_bounds(Coord::new(6, 9)));
        assert!(!field.in_bounds(Coord::new(7, 0)));
        assert!(!field.in_bounds(Coord::new(0, 10)));
        assert!(!field.in_bounds(Coord::new(-1, 3)));
    }

    #[test]
    fn test_get_set() {
        let mut field = Field::all_native(7, 10);
        let at = Coord::new(3, 5);

        field.set(Cell::alien_core(at, InstanceId(1)));

        assert_eq!(field.get(at), Some(&Cell::alien_core(at, InstanceId(1))));
        assert_eq!(field.get(Coord::new(9, 9)), None);
        // Neighbors untouched.
        assert_eq!(field.get(Coord::new(2, 5)), Some(&Cell::native(Coord::new(2, 5))));
    }

    #[test]
    fn test_set_does_not_resize() {
        let mut field = Field::all_native(4, 4);
        field.set(Cell::empty(Coord::new(1, 1)));
        assert_eq!(field.len(), 16);
    }

    #[test]
    fn test_snapshot_independence() {
        let mut field = Field::all_native(4, 4);
        let before = field.clone();

        field.set(Cell::empty(Coord::new(2, 2)));

        assert_eq!(before.get(Coord::new(2, 2)), Some(&Cell::native(Coord::new(2, 2))));
        assert_ne!(before, field);
    }
}
