use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhidError {
    // Identity Errors
    #[error("Identity not found: {0}")]
    IdentityNotFound(String),

    #[error("Identity name already in use: {0}")]
    IdentityExists(String),

    #[error("No active identity configured for github.com")]
    NoActiveIdentity,

    // Store Errors
    #[error("Identity store corrupted: {0}")]
    StoreCorrupted(String),

    // SSH Errors
    #[error("SSH command failed: {0}")]
    SshCommand(String),

    // Config Errors
    #[error("Configuration error: {0}")]
    Config(String),

    // File/IO Errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // User cancelled
    #[error("Operation cancelled by user")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, GhidError>;
