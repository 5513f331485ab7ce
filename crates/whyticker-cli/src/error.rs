use thiserror::Error;
use whyticker_core::{AnalysisError, AnalysisErrorKind};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] whyticker_core::ValidationError),

    #[error("{0}")]
    Analysis(#[from] AnalysisError),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Analysis(error) => match error.kind() {
                AnalysisErrorKind::InvalidInput => 2,
                AnalysisErrorKind::NotFound => 3,
                AnalysisErrorKind::RequestFailed => 4,
            },
            Self::Logging(_) => 1,
            Self::Serialization(_) => 5,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_failures_have_distinct_exit_codes() {
        assert_eq!(CliError::from(AnalysisError::from_status(404)).exit_code(), 3);
        assert_eq!(CliError::from(AnalysisError::from_status(500)).exit_code(), 4);
        assert_eq!(
            CliError::from(whyticker_core::ValidationError::EmptySymbol).exit_code(),
            2
        );
    }
}
