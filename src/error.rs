use thiserror::Error;

/// Reasons a controller refuses to start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("move speed must be positive and finite, got {0}")]
    InvalidMoveSpeed(f32),

    #[error("camera ray length must be positive and finite, got {0}")]
    InvalidRayLength(f32),

    #[error("collision layer `{0}` is not registered")]
    UnknownLayer(String),

    #[error("environment variable {name} has invalid value `{value}`")]
    InvalidEnv { name: &'static str, value: String },
}

/// Failures while registering collision layers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerError {
    #[error("collision layer `{0}` is already registered")]
    Duplicate(String),

    #[error("collision layer table is full ({max} layers)")]
    TableFull { max: usize },
}
