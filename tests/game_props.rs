use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use snake_validator::{
    new_game, plan_route, replay, validate, BoardSize, Position, RngSampler, Snake,
    ValidationError, ValidationPayload, Velocity,
};

fn velocity() -> impl Strategy<Value = Velocity> {
    (-1i32..=1, -1i32..=1).prop_map(|(x, y)| Velocity::new(x, y).unwrap())
}

fn sampler(seed: u64) -> RngSampler<SmallRng> {
    RngSampler::new(SmallRng::seed_from_u64(seed))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn new_game_accepts_every_board_of_two_or_more_cells(
        seed in any::<u64>(),
        width in 1i32..64,
        height in 1i32..64,
    ) {
        prop_assume!(width * height >= 2);
        let state = new_game(width, height, &mut sampler(seed)).unwrap();
        let board = BoardSize::new(width, height).unwrap();
        prop_assert_eq!(state.score, 0);
        prop_assert_eq!(state.snake, Snake::spawn());
        prop_assert_eq!(state.snake.velocity, Velocity::RIGHT);
        prop_assert!(state.game_id.is_empty());
        prop_assert!(board.contains(state.fruit));
        prop_assert_ne!(state.fruit, Position::new(0, 0));
    }

    #[test]
    fn new_game_rejects_non_positive_sides(
        seed in any::<u64>(),
        width in -16i32..=0,
        height in -16i32..16,
    ) {
        prop_assert_eq!(
            new_game(width, height, &mut sampler(seed)),
            Err(ValidationError::InvalidBoardSize)
        );
        prop_assert_eq!(
            new_game(height, width, &mut sampler(seed)),
            Err(ValidationError::InvalidBoardSize)
        );
    }

    #[test]
    fn replay_is_deterministic(
        width in 2i32..12,
        height in 2i32..12,
        fx in 0i32..12,
        fy in 0i32..12,
        ticks in prop::collection::vec(velocity(), 0..24),
    ) {
        let board = BoardSize::new(width, height).unwrap();
        let fruit = Position::new(fx % width, fy % height);
        let first = replay(board, Position::new(0, 0), fruit, &ticks);
        let second = replay(board, Position::new(0, 0), fruit, &ticks);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn only_the_fruit_varies_across_validations(
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
        width in 2i32..12,
        height in 2i32..12,
        ticks in prop::collection::vec(velocity(), 0..24),
    ) {
        let payload = ValidationPayload {
            game_id: "g".to_string(),
            width,
            height,
            score: 3,
            fruit: Position::new(width - 1, height - 1),
            snake: Snake::spawn(),
            ticks,
        };
        let a = validate(&payload, &mut sampler(seed_a));
        let b = validate(&payload, &mut sampler(seed_b));
        match (a, b) {
            (Ok(mut a), Ok(mut b)) => {
                prop_assert_eq!(a.score, 4);
                prop_assert_ne!(a.fruit, a.snake.position);
                a.fruit = Position::default();
                b.fruit = Position::default();
                prop_assert_eq!(a, b);
            }
            (Err(ea), Err(eb)) => prop_assert_eq!(ea, eb),
            (a, b) => prop_assert!(false, "diverged: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn planned_routes_always_validate(
        seed in any::<u64>(),
        width in 1i32..24,
        height in 1i32..24,
        rounds in 1usize..8,
    ) {
        prop_assume!(width * height >= 2);
        let mut rng = sampler(seed);
        let mut state = new_game(width, height, &mut rng).unwrap();
        for round in 0..rounds {
            let route = plan_route(state.snake.position, state.fruit);
            let payload = ValidationPayload::new(state, route);
            state = validate(&payload, &mut rng).unwrap();
            prop_assert_eq!(state.score, round as u64 + 1);
        }
    }

    #[test]
    fn reversal_anywhere_rejects_the_batch(
        prefix in prop::collection::vec(Just(Velocity::DOWN), 0..4),
        flip in prop::sample::select(vec![
            (Velocity::RIGHT, Velocity::LEFT),
            (Velocity::LEFT, Velocity::RIGHT),
            (Velocity::UP, Velocity::DOWN),
            (Velocity::DOWN, Velocity::UP),
        ]),
    ) {
        let board = BoardSize::new(50, 50).unwrap();
        let mut ticks = prefix.clone();
        ticks.push(flip.0);
        ticks.push(flip.1);
        let err = replay(board, Position::new(10, 10), Position::new(40, 40), &ticks);
        let expected_tick = if prefix.is_empty() || flip.0 != Velocity::UP {
            prefix.len() + 1
        } else {
            prefix.len()
        };
        prop_assert_eq!(err, Err(ValidationError::IllegalReversal { tick: expected_tick }));
    }
}
