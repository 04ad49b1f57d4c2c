pub mod classify;
pub mod config;
pub mod events;
pub mod state;
pub mod types;
pub mod validation;

pub use classify::*;
pub use config::*;
pub use events::*;
pub use state::*;
pub use types::*;
pub use validation::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reexports_are_reachable() {
        use std::any::TypeId;
        let _ = TypeId::of::<TaskSpec>();
        let _ = TypeId::of::<TaskKind>();
        let _ = TypeId::of::<ExecutionResult>();
        let _ = TypeId::of::<ResolvedTool>();
        let _ = TypeId::of::<SessionState>();
        let _ = TypeId::of::<SessionEvent>();
        let _ = TypeId::of::<Settings>();
        let _ = TypeId::of::<ValidationIssue>();
    }
}
