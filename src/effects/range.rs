//! Effect-range resolution.
//!
//! Pure mapping from (targeting, anchor, field, facing) to the squares an
//! effect touches. Used when applying card effects, when projecting alien
//! spread, and by presentation layers previewing a play.

use smallvec::SmallVec;

use crate::cards::{CardDefinition, Direction, Shape, Targeting};
use crate::core::Facing;
use crate::grid::{Coord, Field};

/// Coordinate list produced by the resolver.
pub type EffectRange = SmallVec<[Coord; 8]>;

/// Squares affected by `card` anchored at `anchor`.
///
/// Coordinates off the board are filtered out; an out-of-bounds anchor
/// yields nothing. `facing` mirrors vertically-oriented straight directions
/// for the far-side player; horizontal directions ignore it.
#[must_use]
pub fn effect_range(
    card: &CardDefinition,
    anchor: Coord,
    field: &Field,
    facing: Facing,
) -> EffectRange {
    targeting_range(card.targeting(), anchor, field, facing)
}

/// Range for a bare targeting descriptor.
///
/// The spread engine projects an instance's grown stats through this
/// without rebuilding a card definition.
#[must_use]
pub fn targeting_range(
    targeting: Targeting,
    anchor: Coord,
    field: &Field,
    facing: Facing,
) -> EffectRange {
    let Some(anchor_cell) = field.get(anchor) else {
        return EffectRange::new();
    };

    let mut coords = EffectRange::new();
    match targeting {
        Targeting::Species => match anchor_cell.dominant_instance() {
            Some(id) => {
                for cell in field.iter() {
                    if cell.dominant_instance() == Some(id) {
                        coords.push(cell.coord());
                    }
                }
            }
            None => coords.push(anchor),
        },
        Targeting::Shaped {
            shape,
            power,
            direction,
        } => shaped_range(shape, power, direction, anchor, facing, &mut coords),
    }

    coords.retain(|c| field.in_bounds(*c));
    coords
}

fn shaped_range(
    shape: Shape,
    power: u32,
    direction: Option<Direction>,
    anchor: Coord,
    facing: Facing,
    out: &mut EffectRange,
) {
    let power = power as i32;
    match shape {
        Shape::Single => out.push(anchor),
        Shape::Cross => {
            out.push(anchor);
            for i in 1..=power {
                out.push(anchor.offset(0, i));
                out.push(anchor.offset(0, -i));
                out.push(anchor.offset(i, 0));
                out.push(anchor.offset(-i, 0));
            }
        }
        Shape::Range => {
            let reach = power - 1;
            for y in (anchor.y - reach)..=(anchor.y + reach) {
                for x in (anchor.x - reach)..=(anchor.x + reach) {
                    out.push(Coord::new(x, y));
                }
            }
        }
        Shape::Straight => {
            let direction = direction.unwrap_or_else(|| {
                tracing::warn!(
                    "straight footprint without a direction; defaulting to vertical"
                );
                Direction::Vertical
            });
            let vectors: &[(i32, i32)] = match direction {
                Direction::Up => &[(0, -1)],
                Direction::Down => &[(0, 1)],
                Direction::Left => &[(-1, 0)],
                Direction::Right => &[(1, 0)],
                Direction::Vertical => &[(0, 1), (0, -1)],
                Direction::Horizon => &[(1, 0), (-1, 0)],
            };
            // Only vertically-oriented directions mirror with facing.
            let y_mul = match direction {
                Direction::Up | Direction::Down | Direction::Vertical => facing.factor(),
                Direction::Left | Direction::Right | Direction::Horizon => 1,
            };
            for i in 1..=power {
                for &(dx, dy) in vectors {
                    out.push(anchor.offset(dx * i, dy * i * y_mul));
                }
            }
        }
    }
}
