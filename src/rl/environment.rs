//! Turn-based two-agent environment over the engine.
//!
//! Agent `player_0` plays `Color::Light`, `player_1` plays `Color::Dark`. Each
//! step maps an action id back to a move, applies it and hands the turn over.
//! Rewards are `reward_p0` for player 0 and its negation for player 1.

use tracing::{debug, warn};

use crate::errors::{ActionId, EngineError, EngineResult};
use crate::game_state::chess_rules::{BOARD_N, DEFAULT_MAX_ACTIONS};
use crate::game_state::{chess_types::*, game_state::State};
use crate::move_generation::legal_move_generator::Engine;
use crate::rl::action_mapper::DiscreteActionMapper;
use crate::rl::observation::{empty_observation, format_observation, Observation};

pub const PLAYER_AGENT_NAMES: [&str; 2] = ["player_0", "player_1"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvStep {
    /// Indexed by `Color::index`.
    pub rewards: [i8; 2],
    pub done: bool,
    pub info: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PowerChessEnv {
    engine: Engine,
    state: Option<State>,
    done: bool,
    mapper: DiscreteActionMapper,
    legal_actions: Vec<ActionId>,
}

impl Default for PowerChessEnv {
    fn default() -> Self {
        Self::new(Engine::new(), DEFAULT_MAX_ACTIONS)
    }
}

impl PowerChessEnv {
    pub fn new(engine: Engine, max_actions: usize) -> Self {
        Self {
            engine,
            state: None,
            done: false,
            mapper: DiscreteActionMapper::new(max_actions),
            legal_actions: Vec::new(),
        }
    }

    /// Start a new game. The action mapper keeps its ids across resets.
    ///
    /// If the opening moves do not fit the action space the episode is left
    /// finished and the error is returned.
    pub fn reset(&mut self) -> EngineResult<()> {
        let state = self.engine.initial_state();
        self.state = Some(state);
        self.done = false;
        self.legal_actions.clear();
        match self.register_legal_actions(&state) {
            Ok(ids) => {
                self.legal_actions = ids;
                Ok(())
            }
            Err(err) => {
                self.done = true;
                Err(err)
            }
        }
    }

    /// Current position; kept after the episode ends so the final board
    /// can still be inspected.
    #[inline]
    pub fn state(&self) -> Option<&State> {
        self.state.as_ref()
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[inline]
    pub fn action_space_size(&self) -> usize {
        self.mapper.size()
    }

    /// Agent whose turn it is; `None` before `reset` and after the game ends.
    #[inline]
    pub fn agent_selection(&self) -> Option<Color> {
        if self.done {
            return None;
        }
        self.state.map(|state| state.side_to_move)
    }

    /// Legal ids for `agent`; empty when it is not that agent's turn.
    pub fn legal_action_ids(&self, agent: Color) -> &[ActionId] {
        if self.agent_selection() == Some(agent) {
            &self.legal_actions
        } else {
            &[]
        }
    }

    pub fn observe(&self, agent: Color) -> Observation {
        match &self.state {
            Some(state) if !self.done => format_observation(
                state,
                self.legal_action_ids(agent).iter().copied(),
                self.mapper.size(),
            ),
            _ => empty_observation(self.mapper.size()),
        }
    }

    /// Apply `action` for the agent to move.
    ///
    /// The position only advances once the next side's moves have ids. If
    /// they do not fit the action space, the board stays as it was, the
    /// episode is finished and `ActionSpaceExhausted` is returned.
    pub fn step(&mut self, action: ActionId) -> EngineResult<EnvStep> {
        let state = match self.state {
            Some(state) if !self.done => state,
            _ => return Err(EngineError::GameOver),
        };
        let agent = state.side_to_move;
        if !self.legal_actions.contains(&action) {
            return Err(EngineError::IllegalAction { agent, action });
        }

        let mv = self.mapper.build_move(action)?;
        let mut next = state;
        let result = self.engine.apply_move(&mut next, &mv);

        let next_actions = if result.done {
            Vec::new()
        } else {
            match self.register_legal_actions(&next) {
                Ok(ids) => ids,
                Err(err) => {
                    warn!(
                        agent = PLAYER_AGENT_NAMES[agent.index()],
                        action,
                        capacity = self.mapper.size(),
                        "action space exhausted, episode stopped"
                    );
                    self.done = true;
                    self.legal_actions.clear();
                    return Err(err);
                }
            }
        };

        self.state = Some(next);
        self.legal_actions = next_actions;
        if result.done {
            debug!(agent = PLAYER_AGENT_NAMES[agent.index()], action, "episode finished");
            self.done = true;
        }
        Ok(EnvStep {
            rewards: [result.reward_p0, -result.reward_p0],
            done: result.done,
            info: result.info,
        })
    }

    /// Board as rows of two-digit piece codes; the final board once the
    /// episode is over.
    pub fn render(&self) -> String {
        let Some(state) = &self.state else {
            return "<terminated>".to_owned();
        };
        state
            .board
            .chunks(BOARD_N)
            .map(|row| {
                row.iter()
                    .map(|code| format!("{:02}", code.raw()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn register_legal_actions(&mut self, state: &State) -> EngineResult<Vec<ActionId>> {
        let moves = self.engine.legal_moves(state);
        self.mapper.register_moves(&moves)
    }
}
