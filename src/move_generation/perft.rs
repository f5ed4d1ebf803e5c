use std::thread;

use crate::errors::{EngineError, EngineResult};
use crate::game_state::{chess_types::*, game_state::State};
use crate::move_generation::legal_move_generator::Engine;

/// Leaf statistics of the pseudo-legal move tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub specials: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.specials += rhs.specials;
    }

    fn count_leaf(&mut self, mv: &Move) {
        self.nodes += 1;
        if mv.kind.is_capture() {
            self.captures += 1;
        }
        if mv.kind.is_promotion() {
            self.promotions += 1;
        }
        if mv.kind == MoveKind::Special {
            self.specials += 1;
        }
    }
}

/// Count leaves `depth` plies below `state`. Positions that end the game
/// before `depth` are not expanded further.
pub fn perft(engine: &Engine, state: &State, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in engine.legal_moves(state) {
        perft_recurse(engine, state, &mv, depth, 1, &mut total);
    }
    total
}

/// Same counts as [`perft`], with one scoped worker per root move.
pub fn perft_multi_threaded(engine: &Engine, state: &State, depth: u8) -> EngineResult<PerftCounts> {
    if depth == 0 {
        return Ok(perft(engine, state, depth));
    }

    let root_moves = engine.legal_moves(state);
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(engine, state, mv, depth, 1, &mut local);
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            let local = handle.join().map_err(|_| EngineError::WorkerPanicked)?;
            total.merge(local);
        }
        Ok(total)
    })
}

fn perft_recurse(
    engine: &Engine,
    state: &State,
    mv: &Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.count_leaf(mv);
        return;
    }

    let mut next = *state;
    if engine.apply_move(&mut next, mv).done {
        return;
    }
    for reply in engine.legal_moves(&next) {
        perft_recurse(engine, &next, &reply, search_depth, current_depth + 1, counts);
    }
}
