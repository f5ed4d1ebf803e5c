/// Core value types shared by move generation, move application and the
/// RL surface: sides, piece kinds, squares, moves and step results.

pub use crate::game_state::chess_rules::BOARD_N;
pub use crate::game_state::game_state::State;
pub use crate::game_state::piece_code::PieceCode;

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = BOARD_N * BOARD_N;

/// Flat square index `row * BOARD_N + col`.
pub type Square = u8;

const _: () = assert!(BOARD_SQUARES <= Square::MAX as usize + 1, "board does not fit Square");

/// Side to move. `Light` is side 0 and moves first from the bottom ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Color::Light),
            1 => Some(Color::Dark),
            _ => None,
        }
    }

    /// Row on which this side's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => BOARD_N - 1,
        }
    }

    /// Row delta of a pawn step for this side.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    /// Value stored in the kind bits of a [`PieceCode`]; `0` is reserved for empty.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// Move classification. Promotions carry a target piece, specials a payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    #[default]
    Quiet = 0,
    Capture = 1,
    Promote = 2,
    CapturePromote = 3,
    Special = 4,
}

impl MoveKind {
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::CapturePromote)
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self, MoveKind::Promote | MoveKind::CapturePromote)
    }
}

/// A single move. Only meaningful against the state it was generated from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    /// Fully encoded target piece for promotions.
    pub promotion: Option<PieceCode>,
    /// Opaque payload for `MoveKind::Special`.
    pub special_code: u16,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self {
            from,
            to,
            kind,
            promotion: None,
            special_code: 0,
        }
    }

    #[inline]
    pub const fn with_promotion(self, target: PieceCode) -> Self {
        Self {
            promotion: Some(target),
            ..self
        }
    }

    #[inline]
    pub const fn with_special_code(self, special_code: u16) -> Self {
        Self {
            special_code,
            ..self
        }
    }
}

/// Outcome of applying a move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepResult {
    pub done: bool,
    /// Reward from side 0's perspective, one of `-1`, `0`, `1`.
    pub reward_p0: i8,
    pub info: Option<String>,
}

/// Square index of an on-board `(row, col)`. Out-of-range coordinates would
/// alias another square; use [`try_square_at`] when they can occur.
#[inline]
pub const fn square_at(row: usize, col: usize) -> Square {
    debug_assert!(row < BOARD_N && col < BOARD_N, "coordinates off the board");
    (row * BOARD_N + col) as Square
}

/// Checked variant of [`square_at`] for signed grid arithmetic.
#[inline]
pub const fn try_square_at(row: i32, col: i32) -> Option<Square> {
    if row < 0 || col < 0 || row >= BOARD_N as i32 || col >= BOARD_N as i32 {
        return None;
    }
    Some(square_at(row as usize, col as usize))
}

#[inline]
pub const fn row_of(square: Square) -> usize {
    square as usize / BOARD_N
}

#[inline]
pub const fn col_of(square: Square) -> usize {
    square as usize % BOARD_N
}
