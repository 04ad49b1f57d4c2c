//! Map session events to printable lines.

use jera_core::events::{SessionEvent, SessionEventKind};

/// Render one event as the lines a reader should see. Output lines pass
/// through untouched so the child's own formatting survives.
pub fn render_lines(event: &SessionEvent) -> Vec<String> {
    match &event.kind {
        SessionEventKind::TaskStarted { name } => vec![format!("==> {name}")],
        SessionEventKind::OutputLine { line } => vec![line.clone()],
        SessionEventKind::TaskFinished { result } => {
            let verdict = if result.succeeded { "ok" } else { "failed" };
            vec![format!(
                "{verdict}: {} (exit code {})",
                result.name, result.exit_code
            )]
        }
        SessionEventKind::SessionFinished { succeeded, results } => {
            if *succeeded {
                return vec!["session complete: all tasks succeeded".to_string()];
            }
            let failures: Vec<_> = results.iter().filter(|result| !result.succeeded).collect();
            let mut lines = vec![format!("session complete: {} task(s) failed", failures.len())];
            for failure in failures {
                lines.push(format!(
                    "  - {} (exit code {})",
                    failure.name, failure.exit_code
                ));
            }
            lines
        }
    }
}
