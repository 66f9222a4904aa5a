use thiserror::Error;

/// Errors generated when validating a [`Config`](crate::Config) at startup
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Width, height or depth of the scene is zero, negative or not finite
    #[error("scene dimension {name} must be positive, got {value}")]
    InvalidSceneDimension {
        /// Which dimension was rejected
        name: &'static str,
        /// The rejected value
        value: f32,
    },

    /// The far/near ratio must lie in (0, 1]
    #[error("depth ratio must be in (0, 1], got {0}")]
    InvalidDepthRatio(f32),

    /// An entity footprint does not fit inside the scene
    #[error("{entity} of {width}x{height} does not fit in the scene")]
    EntityTooLarge {
        entity: &'static str,
        width: f32,
        height: f32,
    },

    /// A per-tick speed is zero, negative or not finite
    #[error("{name} must be positive, got {value}")]
    InvalidSpeed { name: &'static str, value: f32 },

    #[error("win score must be at least 1")]
    ZeroWinScore,
}
