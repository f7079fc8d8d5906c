#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use snake_validator::prelude::*;
#[cfg(feature = "std")]
use snake_validator::DEFAULT_BIND;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::Read;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Run the stateless HTTP validator.
    Serve {
        #[arg(long, default_value = DEFAULT_BIND)]
        bind: String,
        #[arg(long, help = "Fix RNG seed for reproducible fruit placement (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Print a fresh game state as JSON.
    New {
        #[arg(long)]
        width: i32,
        #[arg(long)]
        height: i32,
        #[arg(long, help = "Fix RNG seed for reproducible fruit placement (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Validate a JSON payload from a file (or stdin) without a server.
    Validate {
        #[arg(long, help = "Payload file; reads stdin when omitted")]
        input: Option<PathBuf>,
        #[arg(long, help = "Fix RNG seed for reproducible fruit placement (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn sampler(seed: Option<u64>) -> RngSampler<SmallRng> {
    let rng = if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    RngSampler::new(rng)
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, seed } => {
            if let Some(s) = seed {
                log::info!("using fixed seed {} (fruit placement is reproducible)", s);
            }
            serve(&bind, AppState::new(seed)).await?;
        }
        Commands::New {
            width,
            height,
            seed,
        } => {
            let state = new_game(width, height, &mut sampler(seed))
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", serde_json::to_string(&state)?);
        }
        Commands::Validate { input, seed } => {
            let raw = match input {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            if raw.trim().is_empty() {
                anyhow::bail!("body is missing");
            }
            let payload: ValidationPayload = serde_json::from_str(&raw)?;
            match validate(&payload, &mut sampler(seed)) {
                Ok(next) => println!("{}", serde_json::to_string(&next)?),
                Err(e) => {
                    eprintln!("{}: {}", e.code(), e);
                    std::process::exit(if e.is_rule_violation() { 2 } else { 1 });
                }
            }
        }
    }
    Ok(())
}
