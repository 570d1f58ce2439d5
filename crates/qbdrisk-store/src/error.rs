use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session file not found: {0}")]
    SessionNotFound(std::path::PathBuf),

    #[error("failed to parse session file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("corrupt session: {0}")]
    CorruptSession(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
