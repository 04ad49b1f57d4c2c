//! Exit code judgement rules.

use crate::types::{ExecutionResult, TaskKind, TaskSpec};

/// Exit codes counted as success for a task kind. Zero always succeeds.
/// The dnf family exits 100 from its update paths when updates were
/// available; only the apply-updates kinds of that family accept it.
pub fn success_codes(kind: TaskKind) -> &'static [i32] {
    match kind {
        TaskKind::DnfUpgrade | TaskKind::YumUpdate => &[0, 100],
        _ => &[0],
    }
}

pub fn classify(kind: TaskKind, exit_code: i32) -> bool {
    success_codes(kind).contains(&exit_code)
}

pub fn classify_result(spec: &TaskSpec, exit_code: i32) -> ExecutionResult {
    ExecutionResult {
        name: spec.name.clone(),
        kind: spec.kind,
        exit_code,
        succeeded: classify(spec.kind, exit_code),
    }
}

/// A session succeeded only when every task in it succeeded.
pub fn session_verdict(results: &[ExecutionResult]) -> bool {
    results.iter().all(|result| result.succeeded)
}
