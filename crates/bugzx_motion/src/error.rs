use thiserror::Error;

/// Errors raised while reading motion props or configuration
///
/// Resolution and style synthesis never fail; only parsing does.
#[derive(Debug, Error)]
pub enum MotionError {
    #[error("invalid motion props: {0}")]
    Props(#[from] serde_json::Error),

    #[error("invalid motion config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid prop `{name}`: {reason}")]
    InvalidProp { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, MotionError>;
