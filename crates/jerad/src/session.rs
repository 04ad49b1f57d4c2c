//! Session scheduler: runs queued tasks strictly one at a time.

use jera_core::classify::{classify_result, session_verdict};
use jera_core::events::{SessionEvent, SessionEventKind};
use jera_core::state::SessionState;
use jera_core::types::{ExecutionResult, ResolvedTool, TaskSpec};
use jera_exec::executor::{execute, ProcessRunner};
use jera_exec::probe::ToolProbe;
use jera_exec::resolver::resolve_escalation_tool;
use jera_notify::sink::EventDispatcher;
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("task queue is empty; nothing to run")]
    EmptyQueue,
    #[error("session already started")]
    AlreadyStarted,
}

/// One run of queued tasks. The scheduler is the sole mutator; results
/// grow by exactly one entry per dequeued task.
#[derive(Debug)]
pub struct Session {
    queue: VecDeque<TaskSpec>,
    results: Vec<ExecutionResult>,
    state: SessionState,
}

impl Session {
    pub fn new(specs: Vec<TaskSpec>) -> Self {
        Session {
            queue: specs.into(),
            results: Vec::new(),
            state: SessionState::Idle,
        }
    }

    pub fn start(&mut self) -> Result<(), SchedulerError> {
        if self.state != SessionState::Idle {
            return Err(SchedulerError::AlreadyStarted);
        }
        if self.queue.is_empty() {
            return Err(SchedulerError::EmptyQueue);
        }
        self.state = SessionState::Running;
        Ok(())
    }

    pub fn next_task(&mut self) -> Option<TaskSpec> {
        if !self.state.is_active() {
            return None;
        }
        self.queue.pop_front()
    }

    pub fn record_result(&mut self, result: ExecutionResult) {
        self.results.push(result);
    }

    /// Consume the session into its final report once the queue is drained.
    pub fn finish(mut self) -> SessionReport {
        self.state = SessionState::Complete;
        let succeeded = session_verdict(&self.results);
        SessionReport {
            succeeded,
            results: self.results,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn results(&self) -> &[ExecutionResult] {
        &self.results
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub succeeded: bool,
    pub results: Vec<ExecutionResult>,
}

/// Drives a session to completion: pop the head task, resolve escalation,
/// execute, classify, advance. Exactly one child process is in flight at
/// any time, and a failed task never stops the ones behind it.
pub struct Scheduler<'a> {
    probe: &'a dyn ToolProbe,
    runner: &'a dyn ProcessRunner,
    dispatcher: &'a EventDispatcher,
}

impl<'a> Scheduler<'a> {
    pub fn new(
        probe: &'a dyn ToolProbe,
        runner: &'a dyn ProcessRunner,
        dispatcher: &'a EventDispatcher,
    ) -> Self {
        Scheduler {
            probe,
            runner,
            dispatcher,
        }
    }

    pub fn run(&self, specs: Vec<TaskSpec>) -> Result<SessionReport, SchedulerError> {
        let mut session = Session::new(specs);
        session.start()?;

        while let Some(spec) = session.next_task() {
            self.emit(SessionEventKind::TaskStarted {
                name: spec.name.clone(),
            });

            // resolved per task, never cached: the tool set can change mid session
            let escalation = if spec.needs_escalation {
                resolve_escalation_tool(self.probe).map(ResolvedTool::from)
            } else {
                None
            };

            let mut forward = |line: String| {
                self.emit(SessionEventKind::OutputLine { line });
            };
            let exit_code = execute(&spec, escalation.as_ref(), self.runner, &mut forward);

            let result = classify_result(&spec, exit_code);
            self.emit(SessionEventKind::TaskFinished {
                result: result.clone(),
            });
            session.record_result(result);
        }

        let report = session.finish();
        self.emit(SessionEventKind::SessionFinished {
            succeeded: report.succeeded,
            results: report.results.clone(),
        });
        Ok(report)
    }

    fn emit(&self, kind: SessionEventKind) {
        for (sink, result) in self.dispatcher.dispatch(&SessionEvent::now(kind)) {
            if let Err(err) = result {
                eprintln!("[notify] delivery to {sink:?} failed: {err}");
            }
        }
    }
}
