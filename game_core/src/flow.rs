//! Game Flow State Machine
//!
//! Menu, serve, rally and scoring as one explicit FSM. The driving loop in
//! [`crate::Game`] feeds it actions; invalid actions leave the state untouched.

use tracing::info;

use crate::Side;

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Menu,
    Serving(Side),
    Rally,
    PointOver,
    MatchOver { winner: Side },
    Quit,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    Start,
    Launch,
    PointScored(Side),
    NextServe,
    MatchWon(Side),
    Quit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FlowState,
    pub to_state: FlowState,
    pub action: FlowAction,
}

/// Game flow FSM
#[derive(Debug, Clone)]
pub struct GameFlow {
    state: FlowState,
    last_server: Side,
}

impl GameFlow {
    pub fn new() -> Self {
        Self {
            state: FlowState::Menu,
            last_server: Side::Player,
        }
    }

    /// Start directly in a serve, skipping the menu
    pub fn serving(side: Side) -> Self {
        Self {
            state: FlowState::Serving(side),
            last_server: side,
        }
    }

    /// Get current state
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Side that served the current (or most recent) point
    pub fn last_server(&self) -> Side {
        self.last_server
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: FlowAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: FlowAction) -> TransitionResult {
        let from_state = self.state;

        let Some(next_state) = self.get_next_state(action) else {
            return TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            };
        };

        self.state = next_state;
        if let FlowState::Serving(side) = next_state {
            self.last_server = side;
        }
        info!(?from_state, to_state = ?next_state, ?action, "flow transition");

        TransitionResult {
            success: true,
            from_state,
            to_state: next_state,
            action,
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: FlowAction) -> Option<FlowState> {
        match (self.state, action) {
            // Terminal
            (FlowState::Quit, _) => None,
            (_, FlowAction::Quit) => Some(FlowState::Quit),
            (FlowState::MatchOver { .. }, _) => None,

            // From Menu
            (FlowState::Menu, FlowAction::Start) => Some(FlowState::Serving(Side::Player)),

            // From Serving
            (FlowState::Serving(_), FlowAction::Launch) => Some(FlowState::Rally),

            // From Rally
            (FlowState::Rally, FlowAction::PointScored(_)) => Some(FlowState::PointOver),

            // From PointOver: servers alternate
            (FlowState::PointOver, FlowAction::NextServe) => {
                Some(FlowState::Serving(self.last_server.opponent()))
            }
            (FlowState::PointOver, FlowAction::MatchWon(winner)) => {
                Some(FlowState::MatchOver { winner })
            }

            // Invalid transition
            _ => None,
        }
    }

    /// Check if the driving loop should stop
    pub fn is_finished(&self) -> bool {
        matches!(self.state, FlowState::MatchOver { .. } | FlowState::Quit)
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            FlowState::MatchOver { winner } => Some(winner),
            _ => None,
        }
    }
}

impl Default for GameFlow {
    fn default() -> Self {
        Self::new()
    }
}
