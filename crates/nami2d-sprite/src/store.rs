use std::collections::HashMap;

use nami2d_core::SpriteError;

// ---------------------------------------------------------------------------
// SpriteExtent
// ---------------------------------------------------------------------------

/// Pixel dimensions of a sprite image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteExtent {
    pub width: f32,
    pub height: f32,
}

impl SpriteExtent {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// ---------------------------------------------------------------------------
// SpriteHandle
// ---------------------------------------------------------------------------

/// Opaque drawable id.
///
/// Meaningless to the rig; the renderer maps it back to whatever drawable
/// resource (atlas region, texture) the asset pipeline produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle(pub u64);

// ---------------------------------------------------------------------------
// Sprite
// ---------------------------------------------------------------------------

/// What a bone borrows from the asset collaborator: a drawable handle and
/// its pixel extent. The extent overrides the bone's authored length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub handle: SpriteHandle,
    pub extent: SpriteExtent,
}

// ---------------------------------------------------------------------------
// SpriteSource
// ---------------------------------------------------------------------------

/// Resolves a sprite path to a drawable handle plus extent.
///
/// # Errors
///
/// Returns [`SpriteError::Unavailable`] when the path has no registered
/// asset. Callers treat this as recoverable: the bone falls back to its
/// authored length and the default anchor.
pub trait SpriteSource {
    fn load(&self, path: &str) -> Result<Sprite, SpriteError>;
}

// ---------------------------------------------------------------------------
// SpriteStore
// ---------------------------------------------------------------------------

/// In-memory path registry implementing [`SpriteSource`].
///
/// Asset tooling registers each sprite's extent once; `load` then hands
/// out stable handles. Handle values are assigned in registration order.
#[derive(Debug, Clone, Default)]
pub struct SpriteStore {
    sprites: HashMap<String, Sprite>,
    next_handle: u64,
}

impl SpriteStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sprite path with its pixel extent, returning its handle.
    ///
    /// Re-registering a path keeps the original handle and updates the
    /// extent.
    pub fn register(&mut self, path: impl Into<String>, width: f32, height: f32) -> SpriteHandle {
        let path = path.into();
        let extent = SpriteExtent::new(width, height);
        if let Some(existing) = self.sprites.get_mut(&path) {
            existing.extent = extent;
            return existing.handle;
        }
        let handle = SpriteHandle(self.next_handle);
        self.next_handle += 1;
        self.sprites.insert(path, Sprite { handle, extent });
        handle
    }

    /// Number of registered sprites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether no sprite is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl SpriteSource for SpriteStore {
    fn load(&self, path: &str) -> Result<Sprite, SpriteError> {
        match self.sprites.get(path) {
            Some(sprite) => Ok(*sprite),
            None => {
                log::warn!("sprite unavailable: {path}, bone keeps its authored length");
                Err(SpriteError::Unavailable(path.to_owned()))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
