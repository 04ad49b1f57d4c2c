use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("task command is empty")]
    EmptyCommand,
    #[error("failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to wait for {command}: {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
