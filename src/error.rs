use thiserror::Error;

/// Failures reading a single project source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not reach {0}")]
    Transport(String),

    #[error("upstream answered with status {0}")]
    Status(u16),

    #[error("projects data could not be read: {0}")]
    Payload(String),

    #[error("projects data structure is incorrect: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
