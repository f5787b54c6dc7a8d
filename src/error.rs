use thiserror::Error;

/// Terminal failure conditions of one invocation. Each variant maps to its
/// own process exit status so the calling process can tell them apart.
#[derive(Debug, Error)]
pub(crate) enum AnalyzerError {
    #[error("Database file not found: {0}")]
    NotFound(String),

    #[error("Failed to read database: {0}")]
    Load(#[from] rusqlite::Error),
}

impl AnalyzerError {
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            AnalyzerError::NotFound(_) => 1,
            AnalyzerError::Load(_) => 2,
        }
    }
}
