//! 2D hierarchical skeletal-animation core.
//!
//! Rigid [`Bone`] segments form ordered [`Chain`]s that are either
//! angle-driven (forward kinematics) or target-driven (inverse
//! kinematics); a [`Skeleton`] anchors a set of chains at a world
//! position. An anchor model decouples each bone's mathematical pivot
//! from where its attached sprite is drawn.
//!
//! # Architecture
//!
//! ```text
//! FrameInput ──► Skeleton::update ──► Chain mode dispatch ──► fk() / ik()
//!                                                                 │
//!                                     renderer reads bone state ◄─┘
//! ```
//!
//! One frame is: sample input once, update every skeleton in a fixed
//! order, then let the renderer read the settled bone transforms. Nothing
//! here blocks or performs I/O; every solve is a bounded pass over a
//! fixed-size bone list.

pub mod anchor;
pub mod bone;
pub mod chain;
pub mod skeleton;

pub use anchor::anchor_from_name;
pub use bone::{Bone, DEFAULT_HIT_RADIUS};
pub use chain::{Chain, ChainParams, ControlMode};
pub use skeleton::Skeleton;
