//! Grid model: coordinates, the cell sum type, and the playing field.

pub mod cell;
pub mod field;

pub use cell::{Cell, Coord};
pub use field::Field;
