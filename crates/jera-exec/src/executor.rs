//! Runs one task as a child process, relaying merged output line by line.

use crate::error::ExecError;
use jera_core::{EscalationTool, ResolvedTool, TaskSpec};
use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;

/// Exit code reported when a task failed before or outside normal process
/// exit: no escalation tool, spawn failure, killed by a signal.
pub const FAILURE_EXIT_CODE: i32 = 1;

pub const MISSING_ESCALATION_LINE: &str = "ERROR: No privilege escalation tool found.";

/// Seam between execution logic and the operating system. `run` must
/// deliver lines as the child produces them, not after it exits.
pub trait ProcessRunner {
    fn run(&self, argv: &[String], on_line: &mut dyn FnMut(String)) -> Result<i32, ExecError>;
}

/// Prefix the argument vector with the escalation tool. kdesu needs an
/// explicit separator before the wrapped command.
pub fn escalation_argv(tool: &ResolvedTool, argv: &[String]) -> Vec<String> {
    let mut wrapped = vec![tool.binary_name.clone()];
    if tool.binary_name == EscalationTool::Kdesu.as_str() {
        wrapped.push("--".to_string());
    }
    wrapped.extend(argv.iter().cloned());
    wrapped
}

/// Run one task to completion and return its exit code. A task that needs
/// escalation with no tool resolved is failed with a diagnostic line and
/// the runner is never invoked; a runner error becomes a diagnostic line
/// plus the sentinel code.
pub fn execute(
    spec: &TaskSpec,
    escalation: Option<&ResolvedTool>,
    runner: &dyn ProcessRunner,
    on_line: &mut dyn FnMut(String),
) -> i32 {
    let argv = if spec.needs_escalation {
        match escalation {
            Some(tool) => escalation_argv(tool, &spec.argv),
            None => {
                on_line(MISSING_ESCALATION_LINE.to_string());
                return FAILURE_EXIT_CODE;
            }
        }
    } else {
        spec.argv.clone()
    };

    match runner.run(&argv, on_line) {
        Ok(code) => code,
        Err(err) => {
            on_line(format!("ERROR: {err}"));
            FAILURE_EXIT_CODE
        }
    }
}

/// Runner backed by std::process. stderr is merged into the line stream.
/// stdin stays attached so terminal escalation tools can prompt on it.
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, argv: &[String], on_line: &mut dyn FnMut(String)) -> Result<i32, ExecError> {
        let (program, args) = argv.split_first().ok_or(ExecError::EmptyCommand)?;
        let mut child = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ExecError::Spawn {
                command: program.clone(),
                source,
            })?;

        let (tx, rx) = mpsc::channel();
        stream_child_output(&mut child, tx);
        for line in rx {
            on_line(line);
        }

        let status = child.wait().map_err(|source| ExecError::Wait {
            command: program.clone(),
            source,
        })?;
        Ok(status.code().unwrap_or(FAILURE_EXIT_CODE))
    }
}

// Reader threads keep both pipes drained so the child never stalls on a
// full buffer; the channel closes once both sides hit EOF.
fn stream_child_output(child: &mut Child, tx: mpsc::Sender<String>) {
    if let Some(stdout) = child.stdout.take() {
        let tx = tx.clone();
        thread::spawn(move || {
            let reader = BufReader::new(stdout);
            for line in reader.lines().map_while(Result::ok) {
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
    }
    if let Some(stderr) = child.stderr.take() {
        thread::spawn(move || {
            let reader = BufReader::new(stderr);
            for line in reader.lines().map_while(Result::ok) {
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
    }
}
