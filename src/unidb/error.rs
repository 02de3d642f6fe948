use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnidbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Input stream closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, UnidbError>;
