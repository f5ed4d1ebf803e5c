//! Observation tensors for learning agents: the raw board codes as an
//! `N x N` grid and a 0/1 mask over the action space.

use crate::errors::ActionId;
use crate::game_state::chess_rules::BOARD_N;
use crate::game_state::{chess_types::*, game_state::State};

pub type BoardTensor = [[u8; BOARD_N]; BOARD_N];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub board: BoardTensor,
    pub action_mask: Vec<i8>,
}

pub fn board_as_tensor(state: &State) -> BoardTensor {
    std::array::from_fn(|row| std::array::from_fn(|col| state.piece_at(square_at(row, col)).raw()))
}

/// Ones at every in-range legal id; out-of-range ids are ignored.
pub fn action_mask<I>(max_actions: usize, legal_ids: I) -> Vec<i8>
where
    I: IntoIterator<Item = ActionId>,
{
    let mut mask = vec![0i8; max_actions];
    for id in legal_ids {
        if let Some(slot) = mask.get_mut(id) {
            *slot = 1;
        }
    }
    mask
}

pub fn format_observation<I>(state: &State, legal_ids: I, max_actions: usize) -> Observation
where
    I: IntoIterator<Item = ActionId>,
{
    Observation {
        board: board_as_tensor(state),
        action_mask: action_mask(max_actions, legal_ids),
    }
}

pub fn empty_observation(max_actions: usize) -> Observation {
    Observation {
        board: [[0; BOARD_N]; BOARD_N],
        action_mask: vec![0; max_actions],
    }
}
