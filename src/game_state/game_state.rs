//! Flat board state.
//!
//! `State` is a plain `Copy` value: the encoded board, the side to move and
//! the ply counter. The engine mutates it in place through `apply_move`;
//! callers are free to copy it around or build positions by hand.

use crate::game_state::chess_rules::{BACK_RANK, BOARD_N};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    pub board: [PieceCode; BOARD_SQUARES],
    pub side_to_move: Color,
    pub ply: u32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            board: [PieceCode::EMPTY; BOARD_SQUARES],
            side_to_move: Color::Light,
            ply: 0,
        }
    }
}

impl State {
    /// Empty board, light to move, ply 0.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Canonical starting position: mirrored back ranks on the outer rows,
    /// pawns on the rows in front of them.
    pub fn new_game() -> Self {
        let mut state = Self::empty();

        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            state.board[square_at(0, col) as usize] = PieceCode::fresh(kind, Color::Dark);
            state.board[square_at(BOARD_N - 1, col) as usize] =
                PieceCode::fresh(kind, Color::Light);
        }
        for col in 0..BOARD_N {
            state.board[square_at(1, col) as usize] =
                PieceCode::fresh(PieceKind::Pawn, Color::Dark);
            state.board[square_at(BOARD_N - 2, col) as usize] =
                PieceCode::fresh(PieceKind::Pawn, Color::Light);
        }

        state
    }

    /// Occupant of `square`; off-board squares read as empty.
    #[inline]
    pub fn piece_at(&self, square: Square) -> PieceCode {
        self.board
            .get(square as usize)
            .copied()
            .unwrap_or(PieceCode::EMPTY)
    }

    /// Overwrite `square`; off-board squares are ignored.
    #[inline]
    pub fn set(&mut self, square: Square, code: PieceCode) {
        if let Some(slot) = self.board.get_mut(square as usize) {
            *slot = code;
        }
    }

    /// Builder-style [`State::set`] for hand-made positions.
    #[inline]
    pub fn with_piece(mut self, square: Square, code: PieceCode) -> Self {
        self.set(square, code);
        self
    }

    #[inline]
    pub fn with_side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Whether each side still has a king on the board, indexed by `Color::index`.
    pub fn king_presence(&self) -> [bool; 2] {
        let mut present = [false; 2];
        for code in self.board {
            if code.is_kind(PieceKind::King) {
                present[code.color().index()] = true;
            }
        }
        present
    }
}
