pub mod error;
pub mod render;
pub mod sink;
pub mod types;

pub use error::*;
pub use render::*;
pub use sink::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reexports_are_reachable() {
        use std::any::TypeId;
        let _ = TypeId::of::<StdoutSink>();
        let _ = TypeId::of::<TranscriptSink>();
        let _ = TypeId::of::<EventDispatcher>();
        let _ = TypeId::of::<SinkPolicy>();
        let _ = TypeId::of::<NotifyError>();
    }
}
