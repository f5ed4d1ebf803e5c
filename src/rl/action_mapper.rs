//! Bi-directional mapping between engine moves and dense action ids.
//!
//! Ids are handed out in first-seen order and stay stable for the lifetime of
//! the mapper, so a policy network can address moves by index.

use rustc_hash::FxHashMap;

use crate::errors::{ActionId, EngineError, EngineResult};
use crate::game_state::chess_types::Move;

#[derive(Debug, Clone)]
pub struct DiscreteActionMapper {
    capacity: usize,
    move_to_id: FxHashMap<Move, ActionId>,
    id_to_move: Vec<Move>,
}

impl DiscreteActionMapper {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            move_to_id: FxHashMap::default(),
            id_to_move: Vec::new(),
        }
    }

    /// Size of the action space, not the number of ids handed out so far.
    #[inline]
    pub fn size(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn registered(&self) -> usize {
        self.id_to_move.len()
    }

    /// Ids for `moves`, registering unseen moves on the way.
    pub fn register_moves<'a, I>(&mut self, moves: I) -> EngineResult<Vec<ActionId>>
    where
        I: IntoIterator<Item = &'a Move>,
    {
        moves.into_iter().map(|mv| self.register(mv)).collect()
    }

    pub fn register(&mut self, mv: &Move) -> EngineResult<ActionId> {
        if let Some(&id) = self.move_to_id.get(mv) {
            return Ok(id);
        }
        if self.id_to_move.len() >= self.capacity {
            return Err(EngineError::ActionSpaceExhausted {
                capacity: self.capacity,
            });
        }

        let id = self.id_to_move.len();
        self.move_to_id.insert(*mv, id);
        self.id_to_move.push(*mv);
        Ok(id)
    }

    #[inline]
    pub fn id_of(&self, mv: &Move) -> Option<ActionId> {
        self.move_to_id.get(mv).copied()
    }

    pub fn build_move(&self, action: ActionId) -> EngineResult<Move> {
        self.id_to_move
            .get(action)
            .copied()
            .ok_or(EngineError::UnknownAction(action))
    }
}
