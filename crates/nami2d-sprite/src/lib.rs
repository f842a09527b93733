//! Sprite/asset collaborator surface.
//!
//! Bones never decode image files. They borrow a [`Sprite`] — an opaque
//! drawable handle plus pixel extent — from whatever implements
//! [`SpriteSource`]. The in-memory [`SpriteStore`] is the reference
//! implementation: asset tooling registers each atlas entry's extent up
//! front, and lookups after that are infallible by construction.
//!
//! A failed load is never fatal (the bone keeps its authored length and
//! the default anchor); the store logs it at `warn` level and returns
//! [`SpriteError::Unavailable`].

pub mod store;

pub use store::{Sprite, SpriteExtent, SpriteHandle, SpriteSource, SpriteStore};
