//! A rigid bone segment.
//!
//! A [`Bone`] is a pivot, an orientation, and a length. Its far end is
//! derived (`end_position`), never stored. When a sprite is bound, the
//! bone's length takes the sprite's width and the anchor locates where
//! inside the sprite the pivot sits; the cached visual position is the
//! pivot shifted back by the anchor offset.

use nalgebra::{Point2, Vector2};

use nami2d_sprite::Sprite;

/// Default pick radius for segment hit tests, in world units.
pub const DEFAULT_HIT_RADIUS: f32 = 15.0;

/// A rigid segment with a pivot, orientation, length, and optional sprite.
#[derive(Debug, Clone)]
pub struct Bone {
    /// World-space pivot.
    pub(crate) position: Point2<f32>,
    /// Orientation in radians, pivot toward far end.
    pub(crate) angle: f32,
    /// Effective segment length (sprite width when a sprite is bound).
    pub(crate) length: f32,
    /// Authored length, kept for the sprite-unavailable fallback.
    authored_length: f32,
    /// Index of the preceding bone in the owning chain (none for the root).
    pub(crate) parent: Option<usize>,
    /// Normalized anchor within the sprite extent, clamped to [0,1]x[0,1].
    anchor: (f32, f32),
    /// Cached draw origin: pivot shifted by -anchor * sprite extent.
    visual_position: Point2<f32>,
    /// Exclusive pick flag within an FK chain.
    pub(crate) selected: bool,
    /// Bound drawable, absent for geometry-only bones.
    sprite: Option<Sprite>,
}

impl Bone {
    /// Create a bone at a pivot with an authored length, pointing along +x.
    #[must_use]
    pub fn new(x: f32, y: f32, length: f32) -> Self {
        Self {
            position: Point2::new(x, y),
            angle: 0.0,
            length,
            authored_length: length,
            parent: None,
            anchor: (0.5, 0.5),
            visual_position: Point2::new(x, y),
            selected: false,
            sprite: None,
        }
    }

    /// World-space pivot.
    #[must_use]
    pub fn position(&self) -> Point2<f32> {
        self.position
    }

    /// Orientation in radians.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Set the orientation directly (FK posing). Callers re-run the chain's
    /// forward pass to restore connectivity afterwards.
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Effective segment length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Length as authored, before any sprite override.
    #[must_use]
    pub fn authored_length(&self) -> f32 {
        self.authored_length
    }

    /// Index of the parent bone in the owning chain, if any.
    #[must_use]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Normalized anchor coordinates.
    #[must_use]
    pub fn anchor(&self) -> (f32, f32) {
        self.anchor
    }

    /// Cached draw origin.
    #[must_use]
    pub fn visual_position(&self) -> Point2<f32> {
        self.visual_position
    }

    /// Whether this bone is the chain's current pick.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The bound sprite, if any.
    #[must_use]
    pub fn sprite(&self) -> Option<&Sprite> {
        self.sprite.as_ref()
    }

    /// Far end of the segment: `pivot + length * (cos angle, sin angle)`.
    #[must_use]
    pub fn end_position(&self) -> Point2<f32> {
        Point2::new(
            self.position.x + self.angle.cos() * self.length,
            self.position.y + self.angle.sin() * self.length,
        )
    }

    /// Reposition the bone so its far end lands on `(tx, ty)`: orient
    /// toward the target, then slide the pivot back along that direction
    /// by one bone length.
    ///
    /// If the target coincides with the current pivot there is no
    /// direction to orient along; pivot and angle are left as they were.
    /// The bone never collapses to zero length.
    pub fn reach_toward(&mut self, tx: f32, ty: f32) {
        let to_target = Vector2::new(tx - self.position.x, ty - self.position.y);
        let dist = to_target.norm();
        if dist > 0.0 {
            self.angle = to_target.y.atan2(to_target.x);
            let back = to_target / dist * self.length;
            self.position = Point2::new(tx - back.x, ty - back.y);
        }
        self.update_visual_position();
    }

    /// Move the pivot onto the parent's far end (FK propagation).
    pub(crate) fn propagate_from(&mut self, parent_end: Point2<f32>) {
        self.position = parent_end;
        self.update_visual_position();
    }

    /// Recompute the cached draw origin from pivot, anchor, and sprite
    /// extent. A bone without a sprite draws at its pivot.
    pub fn update_visual_position(&mut self) {
        self.visual_position = match &self.sprite {
            Some(sprite) => Point2::new(
                self.position.x - self.anchor.0 * sprite.extent.width,
                self.position.y - self.anchor.1 * sprite.extent.height,
            ),
            None => self.position,
        };
    }

    /// Set the anchor, clamping both components to `[0, 1]`.
    pub fn set_anchor(&mut self, ax: f32, ay: f32) {
        self.anchor = (ax.clamp(0.0, 1.0), ay.clamp(0.0, 1.0));
        self.update_visual_position();
    }

    /// Bind a sprite: the bone's length takes the sprite width and the
    /// draw origin is recomputed. The authored length is retained.
    pub fn bind_sprite(&mut self, sprite: Sprite) {
        self.length = sprite.extent.width;
        self.sprite = Some(sprite);
        self.update_visual_position();
    }

    /// Whether `(px, py)` lies within `radius` of the segment from pivot
    /// to far end (clamped to the segment, not the infinite line).
    /// The comparison is strict: a point exactly at `radius` misses.
    #[must_use]
    pub fn hit_test(&self, px: f32, py: f32, radius: f32) -> bool {
        let end = self.end_position();
        let seg = end - self.position;
        let to_point = Vector2::new(px - self.position.x, py - self.position.y);

        let seg_len2 = seg.norm_squared();
        let t = if seg_len2 > 0.0 {
            (to_point.dot(&seg) / seg_len2).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let closest = self.position + seg * t;
        let dx = px - closest.x;
        let dy = py - closest.y;
        dx * dx + dy * dy < radius * radius
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
