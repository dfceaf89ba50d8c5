//! Headless game runner
//!
//! Drives a named policy against seeded games and reports final scores,
//! used for reproducible policy benchmarking.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use torus_snake::core::GameConfig;
use torus_snake::policy::PolicyKind;
use torus_snake::simulation::{apply_direction, create_initial_state, step};
use torus_snake::Status;

/// Headless runner - seeded policy games for benchmarking
#[derive(Parser, Debug)]
#[command(name = "headless")]
#[command(about = "Run a policy against seeded games and report scores")]
struct Args {
    /// Policy name (greedy, cautious, room-max)
    #[arg(long, default_value = "greedy")]
    policy: String,

    /// Grid side length
    #[arg(long, default_value_t = 20)]
    size: i32,

    /// Obstacles seeded at game start
    #[arg(long, default_value_t = 6)]
    obstacles: u32,

    /// Number of games to run (seeds are seed, seed+1, ...)
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Base random seed for deterministic runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum ticks per game before giving up
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,

    /// Dump each final state as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct GameReport {
    seed: u64,
    score: u32,
    snake_len: usize,
    ticks: u64,
    obstacles: usize,
}

fn main() -> torus_snake::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let kind = PolicyKind::from_name(&args.policy)?;
    let policy = kind.build();
    let config = GameConfig::new(args.size, args.obstacles);

    let mut total_score = 0u64;
    for game in 0..args.games {
        let seed = args.seed + u64::from(game);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = create_initial_state(&config, &mut rng)?;

        let mut ticks = 0u64;
        let mut ticks_since_fruit = 0u64;
        while state.status != Status::GameOver && ticks < args.max_ticks {
            let Some(dir) = policy.choose(&state, args.size) else {
                break;
            };
            state = apply_direction(&state, dir);
            let fruits_before = state.fruits_eaten;
            state = step(&state, args.size, &mut rng);
            ticks += 1;
            ticks_since_fruit = if state.fruits_eaten > fruits_before {
                0
            } else {
                ticks_since_fruit + 1
            };
            // Annotation only; the kernel stores it without enforcing it.
            state.time_since_last_fruit = Some(ticks_since_fruit);
        }

        let report = GameReport {
            seed,
            score: state.score,
            snake_len: state.snake.len(),
            ticks,
            obstacles: state.obstacles.len(),
        };
        total_score += u64::from(report.score);
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!(
                "seed {:>6}  score {:>4}  len {:>4}  ticks {:>7}  obstacles {:>3}",
                report.seed, report.score, report.snake_len, report.ticks, report.obstacles
            );
        }
    }

    if args.games > 1 && !args.json {
        println!(
            "policy {}  mean score {:.2} over {} games",
            policy.name(),
            total_score as f64 / f64::from(args.games),
            args.games
        );
    }

    Ok(())
}
