//! Session State Machine
//!
//! Tracks the run lifecycle: Ready -> Running -> GameOver, and back to
//! Ready on reset.

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    Running,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    Crash,
    Reset,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: SessionState,
    pub to_state: SessionState,
    pub action: SessionAction,
}

/// Session Finite State Machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionFsm {
    state: SessionState,
}

impl SessionFsm {
    pub fn new() -> Self {
        Self {
            state: SessionState::Ready,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: SessionAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition; invalid ones leave the state untouched
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from_state = self.state;
        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn get_next_state(&self, action: SessionAction) -> Option<SessionState> {
        match (self.state, action) {
            (SessionState::Ready, SessionAction::Start) => Some(SessionState::Running),
            (SessionState::Running, SessionAction::Crash) => Some(SessionState::GameOver),
            (_, SessionAction::Reset) => Some(SessionState::Ready),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }
}

impl Default for SessionFsm {
    fn default() -> Self {
        Self::new()
    }
}
