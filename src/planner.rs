//! A reference client: the simplest prediction loop that always produces a
//! batch the validator accepts.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::position::{Intent, Position, Velocity};

/// Ticks that walk from `from` to `fruit`, first along x then along y.
///
/// The route never reverses, never moves diagonally and never leaves the
/// rectangle spanned by its two endpoints. It is empty when the snake is
/// already on the fruit.
pub fn plan_route(from: Position, fruit: Position) -> Vec<Intent> {
    let dx = fruit.x as i64 - from.x as i64;
    let dy = fruit.y as i64 - from.y as i64;
    let horizontal = if dx < 0 { Velocity::LEFT } else { Velocity::RIGHT };
    let vertical = if dy < 0 { Velocity::UP } else { Velocity::DOWN };

    let mut route = Vec::with_capacity((dx.unsigned_abs() + dy.unsigned_abs()) as usize);
    route.extend(core::iter::repeat(horizontal).take(dx.unsigned_abs() as usize));
    route.extend(core::iter::repeat(vertical).take(dy.unsigned_abs() as usize));
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goes_across_then_up() {
        let route = plan_route(Position::new(2, 3), Position::new(0, 1));
        assert_eq!(
            route,
            [Velocity::LEFT, Velocity::LEFT, Velocity::UP, Velocity::UP]
        );
    }

    #[test]
    fn same_cell_is_empty() {
        assert!(plan_route(Position::new(1, 1), Position::new(1, 1)).is_empty());
    }
}
