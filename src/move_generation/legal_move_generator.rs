//! Engine entry point for rule queries.
//!
//! Aggregates the per-kind generators over the board in square order. The
//! result is pseudo-legal: no move is filtered for king safety. The engine
//! itself is immutable after construction, so one instance can be shared by
//! any number of threads, each working on its own `State`.

use tracing::trace;

use crate::game_state::{chess_types::*, game_state::State};
use crate::move_generation::legal_move_shared::classify_move;
use crate::move_generation::move_generator::generator_for;
use crate::move_generation::special_moves::SpecialMoveRegistry;

#[derive(Debug, Clone, Default)]
pub struct Engine {
    special_moves: SpecialMoveRegistry,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that runs `registry` handlers for `MoveKind::Special` payloads.
    pub fn with_special_moves(registry: SpecialMoveRegistry) -> Self {
        Self {
            special_moves: registry,
        }
    }

    #[inline]
    pub fn special_moves(&self) -> &SpecialMoveRegistry {
        &self.special_moves
    }

    #[inline]
    pub fn initial_state(&self) -> State {
        State::new_game()
    }

    /// All pseudo-legal moves for the side to move, ordered by origin square
    /// and then by each generator's own order.
    pub fn legal_moves(&self, state: &State) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for from in 0..BOARD_SQUARES as Square {
            self.append_moves_from(state, from, &mut moves);
        }
        moves
    }

    /// Moves of the piece on `from`. Off-board, empty and opponent squares
    /// yield an empty list.
    pub fn legal_moves_from(&self, state: &State, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        self.append_moves_from(state, from, &mut moves);
        moves
    }

    /// One bucket per square; bucket `i` equals `legal_moves_from(state, i)`.
    pub fn group_legal_moves_by_from(&self, state: &State) -> [Vec<Move>; BOARD_SQUARES] {
        std::array::from_fn(|from| self.legal_moves_from(state, from as Square))
    }

    /// Exact structural membership in `legal_moves(state)`; a linear scan.
    pub fn is_legal(&self, state: &State, mv: &Move) -> bool {
        self.legal_moves(state).iter().any(|candidate| candidate == mv)
    }

    /// Classification the generators would give a from/to pair carrying
    /// `special_code`.
    #[inline]
    pub fn deduce_move_kind(
        &self,
        state: &State,
        from: Square,
        to: Square,
        special_code: u16,
    ) -> MoveKind {
        classify_move(state, from, to, special_code)
    }

    #[inline]
    pub const fn square_at(row: usize, col: usize) -> Square {
        square_at(row, col)
    }

    #[inline]
    pub const fn row(square: Square) -> usize {
        row_of(square)
    }

    #[inline]
    pub const fn col(square: Square) -> usize {
        col_of(square)
    }

    fn append_moves_from(&self, state: &State, from: Square, out: &mut Vec<Move>) {
        if from as usize >= BOARD_SQUARES {
            return;
        }
        let piece = state.piece_at(from);
        if !piece.is_side(state.side_to_move) {
            return;
        }
        let Some(generate) = generator_for(piece) else {
            return;
        };

        let before = out.len();
        generate(state, from, out);
        trace!(from, kind = ?piece.kind(), generated = out.len() - before, "generated moves");
    }
}
