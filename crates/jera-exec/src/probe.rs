use std::process::{Command, Stdio};

/// Existence check for external binaries. Implementations must be free of
/// side effects; resolution calls this once per candidate, every time.
pub trait ToolProbe {
    fn command_exists(&self, executable: &str) -> bool;
}

/// Probe backed by a login shell so PATH matches an interactive session.
pub struct ProcessToolProbe;

impl ToolProbe for ProcessToolProbe {
    fn command_exists(&self, executable: &str) -> bool {
        Command::new("bash")
            .arg("-lc")
            .arg(format!("command -v -- {}", shell_quote(executable)))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\"'\"'"))
}
