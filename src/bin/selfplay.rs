//! Self-play series runner.
//!
//! Run with:
//! `cargo run --release --bin selfplay -- [games] [threads] [seed] [first|random]`
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::env;
use std::time::Instant;

use power_chess::rl::self_play::{play_series, Policy, SelfPlayConfig};
use power_chess::utils::render_game_state::render_game_state;
use power_chess::Engine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize, default: T) -> T {
    args.get(idx)
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_policy(args: &[String], idx: usize) -> Result<Policy, String> {
    match args.get(idx).map(String::as_str) {
        None | Some("random") => Ok(Policy::Random),
        Some("first") => Ok(Policy::FirstMove),
        Some(other) => Err(format!("unknown policy '{other}', expected 'first' or 'random'")),
    }
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let defaults = SelfPlayConfig::default();
    let config = SelfPlayConfig {
        games: parse_arg(&args, 1, defaults.games),
        threads: parse_arg(&args, 2, defaults.threads),
        base_seed: parse_arg(&args, 3, defaults.base_seed),
        policy: parse_policy(&args, 4)?,
    };

    let engine = Engine::new();
    info!("initial position\n{}", render_game_state(&engine.initial_state()));

    let start = Instant::now();
    let stats = play_series(&engine, &config).map_err(|e| e.to_string())?;
    let elapsed_ms = start.elapsed().as_millis();

    println!("{}", stats.report());
    println!("elapsed_ms={elapsed_ms}");
    Ok(())
}
