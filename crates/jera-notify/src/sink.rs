use crate::error::NotifyError;
use crate::render::render_lines;
use crate::types::{SessionSinkKind, SinkPolicy};
use jera_core::events::SessionEvent;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait SessionSink: Send + Sync {
    fn kind(&self) -> SessionSinkKind;
    fn send(&self, event: &SessionEvent) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl SessionSink for StdoutSink {
    fn kind(&self) -> SessionSinkKind {
        SessionSinkKind::Stdout
    }

    fn send(&self, event: &SessionEvent) -> Result<(), NotifyError> {
        for line in render_lines(event) {
            println!("{line}");
        }
        Ok(())
    }
}

/// Appends rendered event lines to a plain text log file, so the
/// transcript reads exactly like the live stdout stream.
#[derive(Debug)]
pub struct TranscriptSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl TranscriptSink {
    pub fn create(path: &Path) -> Result<Self, NotifyError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| NotifyError::OpenTranscript {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(TranscriptSink {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionSink for TranscriptSink {
    fn kind(&self) -> SessionSinkKind {
        SessionSinkKind::Transcript
    }

    fn send(&self, event: &SessionEvent) -> Result<(), NotifyError> {
        let mut file = self.file.lock().expect("transcript file lock");
        for line in render_lines(event) {
            writeln!(file, "{line}").map_err(|source| NotifyError::WriteTranscript {
                path: self.path.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

pub struct EventDispatcher {
    sinks: Vec<Box<dyn SessionSink>>,
}

impl EventDispatcher {
    pub fn new(sinks: Vec<Box<dyn SessionSink>>) -> Self {
        Self { sinks }
    }

    pub fn from_policy(policy: &SinkPolicy) -> Self {
        let mut sinks: Vec<Box<dyn SessionSink>> = Vec::new();
        for sink in &policy.enabled_sinks {
            match sink {
                SessionSinkKind::Stdout => sinks.push(Box::new(StdoutSink)),
                // transcripts need a target path, wired up by the caller
                SessionSinkKind::Transcript => {}
            }
        }
        Self { sinks }
    }

    pub fn dispatch(
        &self,
        event: &SessionEvent,
    ) -> Vec<(SessionSinkKind, Result<(), NotifyError>)> {
        let mut out = Vec::new();
        for sink in &self.sinks {
            out.push((sink.kind(), sink.send(event)));
        }
        out
    }
}
