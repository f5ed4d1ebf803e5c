//! Handler registry for `MoveKind::Special` payloads.
//!
//! No generator emits special moves yet. The registry is the hook for future
//! payload-driven effects: after the generic relocation, `apply_move` looks
//! up the move's `special_code` here and runs the matching handler, if any.

use std::num::NonZeroU16;

use rustc_hash::FxHashMap;

use crate::game_state::{chess_types::*, game_state::State};

/// Extra effect applied after the mover has been relocated.
pub type SpecialMoveHandler = fn(&mut State, &Move);

#[derive(Debug, Clone, Default)]
pub struct SpecialMoveRegistry {
    handlers: FxHashMap<NonZeroU16, SpecialMoveHandler>,
}

impl SpecialMoveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `code`, returning the handler it replaced.
    pub fn register(
        &mut self,
        code: NonZeroU16,
        handler: SpecialMoveHandler,
    ) -> Option<SpecialMoveHandler> {
        self.handlers.insert(code, handler)
    }

    /// Handler for a move payload; payload `0` never has one.
    #[inline]
    pub fn handler_for(&self, special_code: u16) -> Option<SpecialMoveHandler> {
        let code = NonZeroU16::new(special_code)?;
        self.handlers.get(&code).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
