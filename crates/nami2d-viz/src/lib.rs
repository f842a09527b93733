//! Renderer-facing hints for nami2d rigs.
//!
//! Nothing here touches simulation state. [`VisibilityMode`] is a hint the
//! renderer may honor about which layers (sprites, joint markers,
//! connecting lines) to surface, and [`sprite_draw_params`] computes the
//! anchor-pinned transform a renderer needs to draw a bone's sprite:
//! rotated by the bone angle about the anchor point, with the anchor held
//! fixed at the pivot.

pub mod draw;
pub mod mode;

pub use draw::{bone_segment, joint_markers, sprite_draw_params, JointMarkers, SpriteDrawParams};
pub use mode::VisibilityMode;
