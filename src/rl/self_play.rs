//! Self-play harness.
//!
//! Plays whole games with a simple policy and aggregates outcomes. Games are
//! spread over worker threads; every game owns its `State` and an RNG seeded
//! from `base_seed + game_index`, so a series is reproducible regardless of
//! the thread count.

use std::thread;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::Engine;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// Always play the first generated move.
    #[default]
    FirstMove,
    /// Uniformly random pseudo-legal move.
    Random,
}

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub games: usize,
    pub base_seed: u64,
    pub threads: usize,
    pub policy: Policy,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 16,
            base_seed: 1234,
            threads: 4,
            policy: Policy::Random,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub plies: u32,
    pub result: StepResult,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesStats {
    pub games: usize,
    pub light_wins: usize,
    pub dark_wins: usize,
    pub draws: usize,
    pub total_plies: u64,
}

impl SeriesStats {
    fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        self.total_plies += u64::from(game.plies);
        match game.result.reward_p0 {
            1 => self.light_wins += 1,
            -1 => self.dark_wins += 1,
            _ => self.draws += 1,
        }
    }

    fn merge(&mut self, rhs: SeriesStats) {
        self.games += rhs.games;
        self.light_wins += rhs.light_wins;
        self.dark_wins += rhs.dark_wins;
        self.draws += rhs.draws;
        self.total_plies += rhs.total_plies;
    }

    pub fn average_plies(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / self.games as f64
        }
    }

    pub fn report(&self) -> String {
        format!(
            "games={} light_wins={} dark_wins={} draws={} avg_plies={:.1}",
            self.games,
            self.light_wins,
            self.dark_wins,
            self.draws,
            self.average_plies()
        )
    }
}

/// Play one game from the initial position.
pub fn play_game<R: Rng + ?Sized>(engine: &Engine, policy: Policy, rng: &mut R) -> GameRecord {
    play_game_from(engine, engine.initial_state(), policy, rng)
}

/// Play `state` out to the end. A side left without moves ends the game as a
/// draw.
pub fn play_game_from<R: Rng + ?Sized>(
    engine: &Engine,
    mut state: State,
    policy: Policy,
    rng: &mut R,
) -> GameRecord {
    let mut moves = Vec::new();

    loop {
        let legal = engine.legal_moves(&state);
        let picked = match policy {
            Policy::FirstMove => legal.first(),
            Policy::Random => legal.choose(rng),
        };
        let Some(&mv) = picked else {
            return GameRecord {
                moves,
                plies: state.ply,
                result: StepResult {
                    done: true,
                    reward_p0: 0,
                    info: Some("no legal moves".to_owned()),
                },
            };
        };

        let result = engine.apply_move(&mut state, &mv);
        moves.push(mv);
        if result.done {
            return GameRecord {
                moves,
                plies: state.ply,
                result,
            };
        }
    }
}

pub fn play_series(engine: &Engine, config: &SelfPlayConfig) -> EngineResult<SeriesStats> {
    let workers = config.threads.clamp(1, config.games.max(1));
    info!(
        games = config.games,
        workers,
        seed = config.base_seed,
        policy = ?config.policy,
        "starting self-play series"
    );

    let stats = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                scope.spawn(move || {
                    let mut local = SeriesStats::default();
                    for game_index in (worker..config.games).step_by(workers) {
                        let seed = config.base_seed.wrapping_add(game_index as u64);
                        let mut rng = StdRng::seed_from_u64(seed);
                        let game = play_game(engine, config.policy, &mut rng);
                        debug!(
                            game_index,
                            plies = game.plies,
                            reward_p0 = game.result.reward_p0,
                            reason = game.result.info.as_deref().unwrap_or_default(),
                            "game finished"
                        );
                        local.record(&game);
                    }
                    local
                })
            })
            .collect();

        let mut total = SeriesStats::default();
        for handle in handles {
            let local = handle.join().map_err(|_| EngineError::WorkerPanicked)?;
            total.merge(local);
        }
        Ok::<_, EngineError>(total)
    })?;

    info!(report = %stats.report(), "self-play series finished");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::game_state::chess_rules::MAX_PLY;

    #[test]
    fn first_move_game_runs_to_the_ply_cap() {
        let engine = Engine::new();
        let mut rng = StdRng::seed_from_u64(0);
        let game = play_game(&engine, Policy::FirstMove, &mut rng);

        assert!(game.result.done);
        assert_eq!(game.plies, MAX_PLY);
        assert_eq!(game.moves.len(), MAX_PLY as usize);
        assert_eq!(game.result.reward_p0, 0);
    }

    #[test]
    fn random_games_are_reproducible() {
        let engine = Engine::new();
        let a = play_game(&engine, Policy::Random, &mut StdRng::seed_from_u64(42));
        let b = play_game(&engine, Policy::Random, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(a.result.done);
        assert!(a.plies <= MAX_PLY);
        assert!((-1..=1).contains(&a.result.reward_p0));
    }

    #[test]
    fn series_does_not_depend_on_thread_count() {
        let engine = Engine::new();
        let single = play_series(
            &engine,
            &SelfPlayConfig {
                games: 6,
                threads: 1,
                ..SelfPlayConfig::default()
            },
        )
        .expect("single worker");
        let parallel = play_series(
            &engine,
            &SelfPlayConfig {
                games: 6,
                threads: 3,
                ..SelfPlayConfig::default()
            },
        )
        .expect("three workers");

        assert_eq!(single, parallel);
        assert_eq!(single.games, 6);
        assert_eq!(single.light_wins + single.dark_wins + single.draws, 6);
    }

    #[test]
    fn empty_series_reports_zero() {
        let engine = Engine::new();
        let stats = play_series(
            &engine,
            &SelfPlayConfig {
                games: 0,
                ..SelfPlayConfig::default()
            },
        )
        .expect("nothing to play");
        assert_eq!(stats, SeriesStats::default());
        assert_eq!(stats.average_plies(), 0.0);
    }

    #[test]
    fn side_without_moves_ends_in_a_draw() {
        let engine = Engine::new();
        let moved_pawn = PieceCode::new(PieceKind::Pawn, Color::Light, true, 0);
        // light king boxed in by columns of its own pawns, all blocked
        let mut state = State::empty()
            .with_piece(square_at(5, 5), PieceCode::fresh(PieceKind::King, Color::Light))
            .with_piece(square_at(5, 4), moved_pawn)
            .with_piece(square_at(5, 0), PieceCode::fresh(PieceKind::King, Color::Dark));
        for row in 0..5 {
            state.set(square_at(row, 4), moved_pawn);
            state.set(square_at(row, 5), moved_pawn);
        }
        assert!(engine.legal_moves(&state).is_empty());

        let game = play_game_from(&engine, state, Policy::Random, &mut StdRng::seed_from_u64(7));
        assert!(game.moves.is_empty());
        assert_eq!(game.plies, 0);
        assert_eq!(
            game.result,
            StepResult {
                done: true,
                reward_p0: 0,
                info: Some("no legal moves".to_owned()),
            }
        );
    }
}
