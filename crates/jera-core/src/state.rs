//! Session lifecycle state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A session moves Idle -> Running -> Complete and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    Idle,
    Running,
    Complete,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "IDLE",
            SessionState::Running => "RUNNING",
            SessionState::Complete => "COMPLETE",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Complete)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Running)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
