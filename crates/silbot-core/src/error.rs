use thiserror::Error;

/// Top-level error type for silbot.
#[derive(Debug, Error)]
pub enum SilbotError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// The request never reached Telegram (timeout, DNS, refused connection).
    #[error("transport error: {0}")]
    Transport(String),

    /// Telegram answered with `ok: false`.
    #[error("telegram api error {code}: {description}")]
    Api { code: i64, description: String },

    /// Error raised by a `DatabaseManager` implementation.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
