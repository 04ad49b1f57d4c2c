use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to open transcript at {path}: {source}")]
    OpenTranscript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write transcript at {path}: {source}")]
    WriteTranscript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("sink delivery failed: {message}")]
    SinkFailed { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = NotifyError::SinkFailed {
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "sink delivery failed: boom");

        let err = NotifyError::OpenTranscript {
            path: PathBuf::from("/tmp/log.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err
            .to_string()
            .starts_with("failed to open transcript at /tmp/log.txt:"));
    }

    #[test]
    fn variants_match_by_shape() {
        let err = NotifyError::WriteTranscript {
            path: PathBuf::from("/tmp/log.txt"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(matches!(
            err,
            NotifyError::WriteTranscript { ref path, .. } if path.ends_with("log.txt")
        ));
    }
}
