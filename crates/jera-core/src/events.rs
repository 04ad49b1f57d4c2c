use crate::types::ExecutionResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEvent {
    pub at: DateTime<Utc>,
    pub kind: SessionEventKind,
}

impl SessionEvent {
    pub fn now(kind: SessionEventKind) -> Self {
        SessionEvent {
            at: Utc::now(),
            kind,
        }
    }
}

/// Everything subscribers can observe about a running session.
/// Per task the order is task_started, output_line*, task_finished;
/// session_finished is emitted exactly once at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEventKind {
    TaskStarted {
        name: String,
    },
    OutputLine {
        line: String,
    },
    TaskFinished {
        result: ExecutionResult,
    },
    SessionFinished {
        succeeded: bool,
        results: Vec<ExecutionResult>,
    },
}
