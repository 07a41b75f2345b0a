use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    InvalidEnvVar {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("voice not found: {0}")]
    VoiceNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
