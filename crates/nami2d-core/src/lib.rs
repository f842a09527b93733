//! Errors, frame clock, input snapshot, and rig configuration for nami2d.

pub mod config;
pub mod error;
pub mod input;
pub mod time;

pub use config::{ChainConfig, RigConfig, SkeletonConfig};
pub use error::{ConfigError, NamiError, RigError, SpriteError};
pub use input::{ArrowKey, FrameInput, PressedKeys};
pub use time::SimTime;
