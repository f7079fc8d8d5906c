//! Fruit placement: an injectable source of random cells.

use rand::Rng;

use crate::config::MAX_SPAWN_ATTEMPTS;
use crate::position::{BoardSize, Position};

/// Something that can pick a cell on a board.
///
/// Implementations should return cells inside `board`; anything else is
/// discarded by [`spawn_fruit`].
pub trait PositionSampler {
    fn sample(&mut self, board: BoardSize) -> Position;
}

/// Uniform sampling backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> PositionSampler for RngSampler<R> {
    fn sample(&mut self, board: BoardSize) -> Position {
        Position::new(
            self.rng.random_range(0..board.width()),
            self.rng.random_range(0..board.height()),
        )
    }
}

/// Pick a fruit cell on `board` different from `avoid`.
///
/// Draws up to `MAX_SPAWN_ATTEMPTS` samples, then scans row-major for the
/// first free cell. A `BoardSize` always has two or more cells, so the scan
/// cannot come up empty.
pub fn spawn_fruit<S: PositionSampler + ?Sized>(
    sampler: &mut S,
    board: BoardSize,
    avoid: Position,
) -> Position {
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = sampler.sample(board);
        if board.contains(candidate) && candidate != avoid {
            return candidate;
        }
    }
    (0..board.cell_count())
        .filter_map(|i| board.position_at(i))
        .find(|&p| p != avoid)
        .unwrap_or(avoid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    struct Always(Position);

    impl PositionSampler for Always {
        fn sample(&mut self, _board: BoardSize) -> Position {
            self.0
        }
    }

    #[test]
    fn falls_back_to_scan_when_sampler_repeats() {
        let board = BoardSize::new(2, 1).unwrap();
        let mut stuck = Always(Position::new(0, 0));
        assert_eq!(
            spawn_fruit(&mut stuck, board, Position::new(0, 0)),
            Position::new(1, 0)
        );
    }

    #[test]
    fn out_of_board_samples_are_discarded() {
        let board = BoardSize::new(3, 3).unwrap();
        let mut wild = Always(Position::new(7, -2));
        assert_eq!(
            spawn_fruit(&mut wild, board, Position::new(0, 0)),
            Position::new(1, 0)
        );
    }

    #[test]
    fn rng_sampler_stays_on_board() {
        let board = BoardSize::new(4, 7).unwrap();
        let mut sampler = RngSampler::new(SmallRng::seed_from_u64(9));
        for _ in 0..500 {
            assert!(board.contains(sampler.sample(board)));
        }
    }
}
