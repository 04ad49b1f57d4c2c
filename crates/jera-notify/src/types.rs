use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionSinkKind {
    Stdout,
    Transcript,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkPolicy {
    pub enabled_sinks: Vec<SessionSinkKind>,
}

impl Default for SinkPolicy {
    fn default() -> Self {
        Self {
            enabled_sinks: vec![SessionSinkKind::Stdout],
        }
    }
}
