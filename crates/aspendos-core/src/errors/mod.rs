//! Error handling for Aspendos.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod llm_error;

pub use config_error::ConfigError;
pub use llm_error::LlmError;

/// Top-level error wrapping every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum AspendosError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type AspendosResult<T> = Result<T, AspendosError>;
