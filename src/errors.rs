use thiserror::Error;

use crate::game_state::chess_types::{Color, MoveKind, Square};

/// Dense id of a move inside the discrete action space.
pub type ActionId = usize;

pub type EngineResult<T> = Result<T, EngineError>;

/// Failures reported by the checked entry points. The unchecked fast paths
/// (`legal_moves_from`, `apply_move`) never produce these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("illegal move {kind:?} from square {from} to square {to}")]
    IllegalMove {
        from: Square,
        to: Square,
        kind: MoveKind,
    },
    #[error("unknown action id {0}")]
    UnknownAction(ActionId),
    #[error("action space exhausted at {capacity} unique moves")]
    ActionSpaceExhausted { capacity: usize },
    #[error("action {action} is illegal for {agent:?}")]
    IllegalAction { agent: Color, action: ActionId },
    #[error("game is already over")]
    GameOver,
    #[error("worker thread panicked")]
    WorkerPanicked,
}
