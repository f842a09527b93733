//! TOML rig configuration.
//!
//! A rig file declares skeletons, each with a world position and a set of
//! bone chains. Chains name their bone lengths and, optionally, explicit
//! per-bone pivots, anchors, and sprite paths. Validation happens once at
//! load time; the rig crate then builds live `Skeleton` values from these
//! plain structures.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// ChainConfig
// ---------------------------------------------------------------------------

/// Configuration for one bone chain within a skeleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Chain origin relative to the owning skeleton.
    #[serde(default)]
    pub offset: [f32; 2],

    /// Authored bone lengths, root to tip. Must be non-empty.
    pub lengths: Vec<f32>,

    /// Whether this chain is target-driven (IK) rather than angle-driven (FK).
    #[serde(default)]
    pub ik: bool,

    /// Optional explicit world-space pivot per bone. When present, bones are
    /// placed directly instead of being laid out with a forward pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<[f32; 2]>>,

    /// Optional explicit anchor per bone, each in `[0,1] x [0,1]`.
    /// Overrides filename-derived anchors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchors: Option<Vec<[f32; 2]>>,

    /// Optional sprite path per bone, resolved by the sprite collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprites: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// SkeletonConfig
// ---------------------------------------------------------------------------

/// Configuration for one skeleton: a named, positioned set of chains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkeletonConfig {
    /// Skeleton name (for selection and UI display).
    pub name: String,

    /// World position of the skeleton.
    #[serde(default)]
    pub position: [f32; 2],

    /// Chains owned by this skeleton.
    #[serde(default)]
    pub chains: Vec<ChainConfig>,
}

// ---------------------------------------------------------------------------
// RigConfig
// ---------------------------------------------------------------------------

/// Top-level rig file: every skeleton in the scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RigConfig {
    #[serde(default)]
    pub skeletons: Vec<SkeletonConfig>,
}

impl RigConfig {
    /// Load from a TOML file and validate.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string and validate.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every skeleton. Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for skeleton in &self.skeletons {
            for chain in &skeleton.chains {
                validate_chain(&skeleton.name, chain)?;
            }
        }
        Ok(())
    }
}

fn validate_chain(skeleton: &str, chain: &ChainConfig) -> Result<(), ConfigError> {
    if chain.lengths.is_empty() {
        return Err(ConfigError::EmptyChain {
            skeleton: skeleton.to_owned(),
        });
    }
    for &length in &chain.lengths {
        if !length.is_finite() || length < 0.0 {
            return Err(ConfigError::InvalidLength {
                skeleton: skeleton.to_owned(),
                value: length,
            });
        }
    }

    let expected = chain.lengths.len();
    check_count(skeleton, "positions", expected, chain.positions.as_deref())?;
    check_count(skeleton, "anchors", expected, chain.anchors.as_deref())?;
    check_count(skeleton, "sprites", expected, chain.sprites.as_deref())?;
    Ok(())
}

fn check_count<T>(
    skeleton: &str,
    field: &'static str,
    expected: usize,
    list: Option<&[T]>,
) -> Result<(), ConfigError> {
    match list {
        Some(items) if items.len() != expected => Err(ConfigError::CountMismatch {
            skeleton: skeleton.to_owned(),
            field,
            expected,
            got: items.len(),
        }),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
