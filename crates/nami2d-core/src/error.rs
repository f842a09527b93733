use thiserror::Error;

/// Top-level error type for nami2d.
#[derive(Debug, Error)]
pub enum NamiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rig error: {0}")]
    Rig(#[from] RigError),

    #[error("Sprite error: {0}")]
    Sprite(#[from] SpriteError),
}

/// Rig configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Skeleton '{skeleton}' has a chain with no bones")]
    EmptyChain { skeleton: String },

    #[error("Invalid bone length {value} in skeleton '{skeleton}' (must be finite and >= 0)")]
    InvalidLength { skeleton: String, value: f32 },

    #[error("Per-bone list '{field}' in skeleton '{skeleton}' has {got} entries, expected {expected}")]
    CountMismatch {
        skeleton: String,
        field: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Runtime rig construction errors.
///
/// Copy + static payloads for cheap propagation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RigError {
    #[error("Chain must contain at least one bone")]
    EmptyChain,

    #[error("Invalid bone length: {0} (must be finite and >= 0)")]
    InvalidLength(f32),
}

/// Sprite collaborator errors.
///
/// Always recoverable from the rig's point of view: a bone that fails to
/// bind a sprite keeps its authored length and the default anchor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpriteError {
    #[error("Sprite asset unavailable: {0}")]
    Unavailable(String),
}
