use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use snake_validator::{new_game, plan_route, validate, RngSampler, ValidationPayload};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 5 {
        eprintln!("Usage: {} <seed> <width> <height> <rounds>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let width: i32 = args[2].parse()?;
    let height: i32 = args[3].parse()?;
    let rounds: usize = args[4].parse()?;

    let mut sampler = RngSampler::new(SmallRng::seed_from_u64(seed));
    let mut state = new_game(width, height, &mut sampler).map_err(|e| anyhow::anyhow!(e))?;
    state.game_id = format!("sim-{}", seed);

    let mut ticks = 0usize;
    for _ in 0..rounds {
        let route = plan_route(state.snake.position, state.fruit);
        ticks += route.len();
        let payload = ValidationPayload::new(state, route);
        state = validate(&payload, &mut sampler).map_err(|e| anyhow::anyhow!(e))?;
    }

    let result = json!({
        "gameId": state.game_id,
        "score": state.score,
        "ticks": ticks,
        "snake": state.snake,
        "fruit": state.fruit,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
