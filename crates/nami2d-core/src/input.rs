//! Per-frame input snapshot.
//!
//! The core never polls input devices. External code (a window event loop,
//! a test harness, a replay reader) samples input once per frame, writes
//! the pressed directional keys into a [`PressedKeys`] buffer, and hands
//! the whole [`FrameInput`] to `Skeleton::update`.

use std::collections::HashSet;

use nalgebra::Point2;

use crate::time::SimTime;

// ---------------------------------------------------------------------------
// ArrowKey
// ---------------------------------------------------------------------------

/// Directional keys consumed by the key-driven control mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    Left,
    Right,
    Up,
    Down,
}

impl ArrowKey {
    /// Human-readable label for UI display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Up => "Up",
            Self::Down => "Down",
        }
    }
}

// ---------------------------------------------------------------------------
// PressedKeys
// ---------------------------------------------------------------------------

/// Buffer of directional keys held down this frame.
///
/// External input code writes into this with [`press`](Self::press) /
/// [`release`](Self::release); the frame step only reads it.
///
/// # Example
///
/// ```
/// use nami2d_core::{ArrowKey, PressedKeys};
///
/// let mut keys = PressedKeys::new();
/// keys.press(ArrowKey::Left);
/// assert!(keys.is_pressed(ArrowKey::Left));
/// assert!(!keys.is_pressed(ArrowKey::Right));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PressedKeys {
    held: HashSet<ArrowKey>,
}

impl PressedKeys {
    /// Create an empty buffer (no keys held).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held.
    pub fn press(&mut self, key: ArrowKey) {
        self.held.insert(key);
    }

    /// Mark a key as released.
    pub fn release(&mut self, key: ArrowKey) {
        self.held.remove(&key);
    }

    /// Whether a key is currently held.
    #[must_use]
    pub fn is_pressed(&self, key: ArrowKey) -> bool {
        self.held.contains(&key)
    }

    /// Release every key.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.held.len()
    }

    /// Whether no key is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Iterator over held keys.
    pub fn iter(&self) -> impl Iterator<Item = ArrowKey> + '_ {
        self.held.iter().copied()
    }
}

// ---------------------------------------------------------------------------
// FrameInput
// ---------------------------------------------------------------------------

/// Everything the simulation reads in one frame: elapsed time, the pointer
/// position in world space, and the held directional keys.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Elapsed simulation time.
    pub time: SimTime,
    /// Pointer position in world coordinates.
    pub pointer: Point2<f32>,
    /// Directional keys held this frame.
    pub keys: PressedKeys,
}

impl FrameInput {
    /// Snapshot with the given clock and pointer, no keys held.
    #[must_use]
    pub fn new(time: SimTime, pointer_x: f32, pointer_y: f32) -> Self {
        Self {
            time,
            pointer: Point2::new(pointer_x, pointer_y),
            keys: PressedKeys::new(),
        }
    }

    /// Elapsed time in seconds, as the animation formulas consume it.
    #[must_use]
    pub fn secs(&self) -> f32 {
        self.time.secs_f32()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_keys_default_empty() {
        let keys = PressedKeys::new();
        assert!(keys.is_empty());
        assert!(!keys.is_pressed(ArrowKey::Up));
    }

    #[test]
    fn press_and_release() {
        let mut keys = PressedKeys::new();
        keys.press(ArrowKey::Left);
        keys.press(ArrowKey::Up);
        assert_eq!(keys.len(), 2);
        assert!(keys.is_pressed(ArrowKey::Left));

        keys.release(ArrowKey::Left);
        assert!(!keys.is_pressed(ArrowKey::Left));
        assert!(keys.is_pressed(ArrowKey::Up));
    }

    #[test]
    fn press_is_idempotent() {
        let mut keys = PressedKeys::new();
        keys.press(ArrowKey::Down);
        keys.press(ArrowKey::Down);
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn clear_releases_all() {
        let mut keys = PressedKeys::new();
        keys.press(ArrowKey::Left);
        keys.press(ArrowKey::Right);
        keys.clear();
        assert!(keys.is_empty());
    }

    #[test]
    fn iter_visits_held_keys() {
        let mut keys = PressedKeys::new();
        keys.press(ArrowKey::Up);
        keys.press(ArrowKey::Down);
        assert_eq!(keys.iter().count(), 2);
    }

    #[test]
    fn frame_input_secs() {
        let input = FrameInput::new(SimTime::from_secs(2.5), 100.0, 200.0);
        assert!((input.secs() - 2.5).abs() < f32::EPSILON);
        assert!((input.pointer.x - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn arrow_key_labels() {
        assert_eq!(ArrowKey::Left.label(), "Left");
        assert_eq!(ArrowKey::Down.label(), "Down");
    }
}
