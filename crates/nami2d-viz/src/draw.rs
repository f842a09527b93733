//! Anchor-pinned draw transforms.
//!
//! A bone's sprite must rotate by the bone angle about its anchor point
//! while the anchor stays fixed at the pivot. Renderers usually rotate
//! images about their center, so the useful quantity is the rotated
//! center position: take the anchor-to-center offset in sprite space,
//! rotate it by the bone angle, and add it to the pivot.

use nalgebra::{Point2, Rotation2, Vector2};

use nami2d_rig::Bone;
use nami2d_sprite::{SpriteExtent, SpriteHandle};

// ---------------------------------------------------------------------------
// SpriteDrawParams
// ---------------------------------------------------------------------------

/// Everything a renderer needs to draw one bone's sprite: rotate the image
/// by `angle` about its center and place that center at `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDrawParams {
    /// Opaque drawable id from the asset collaborator.
    pub handle: SpriteHandle,
    /// World position of the rotated sprite's center.
    pub center: Point2<f32>,
    /// Rotation in radians, shared with the bone.
    pub angle: f32,
    /// Unrotated pixel extent.
    pub extent: SpriteExtent,
}

/// Compute the anchor-pinned draw transform for a bone's sprite.
///
/// Returns `None` for geometry-only bones. The transform satisfies the
/// anchor contract: rotating the sprite by `angle` about the returned
/// center leaves the anchor point exactly on the bone's pivot.
#[must_use]
pub fn sprite_draw_params(bone: &Bone) -> Option<SpriteDrawParams> {
    let sprite = bone.sprite()?;
    let extent = sprite.extent;
    let (ax, ay) = bone.anchor();

    // Anchor-to-center offset in unrotated sprite space.
    let offset = Vector2::new(
        extent.width / 2.0 - ax * extent.width,
        extent.height / 2.0 - ay * extent.height,
    );
    let rotated = Rotation2::new(bone.angle()) * offset;

    Some(SpriteDrawParams {
        handle: sprite.handle,
        center: bone.position() + rotated,
        angle: bone.angle(),
        extent,
    })
}

// ---------------------------------------------------------------------------
// JointMarkers
// ---------------------------------------------------------------------------

/// Pivot and far-end marker positions for one bone, with its pick state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointMarkers {
    pub pivot: Point2<f32>,
    pub end: Point2<f32>,
    pub selected: bool,
}

/// Joint marker positions for a bone.
#[must_use]
pub fn joint_markers(bone: &Bone) -> JointMarkers {
    JointMarkers {
        pivot: bone.position(),
        end: bone.end_position(),
        selected: bone.is_selected(),
    }
}

/// The pivot-to-end segment, for the connecting-line layer.
#[must_use]
pub fn bone_segment(bone: &Bone) -> (Point2<f32>, Point2<f32>) {
    (bone.position(), bone.end_position())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nami2d_rig::{Chain, ChainParams};
    use nami2d_sprite::{SpriteSource, SpriteStore};

    fn sprite_bone(width: f32, height: f32, anchor: (f32, f32), angle: f32) -> Bone {
        let mut store = SpriteStore::new();
        store.register("seg.png", width, height);
        let sprite = store.load("seg.png").unwrap();

        let mut bone = Bone::new(40.0, 60.0, width);
        bone.bind_sprite(sprite);
        bone.set_anchor(anchor.0, anchor.1);
        bone.set_angle(angle);
        bone
    }

    #[test]
    fn geometry_only_bone_has_no_sprite_params() {
        let chain = Chain::new(
            ChainParams::fk(0.0, 0.0, vec![50.0]),
            Point2::origin(),
            &SpriteStore::new(),
        )
        .unwrap();
        assert!(sprite_draw_params(&chain.bones()[0]).is_none());
    }

    #[test]
    fn unrotated_center_offsets_from_anchor() {
        // Anchor at the left-center of a 100x40 sprite: the center sits
        // half a width to the right of the pivot.
        let bone = sprite_bone(100.0, 40.0, (0.0, 0.5), 0.0);
        let params = sprite_draw_params(&bone).unwrap();

        assert_relative_eq!(params.center.x, bone.position().x + 50.0, epsilon = 1e-4);
        assert_relative_eq!(params.center.y, bone.position().y, epsilon = 1e-4);
        assert_relative_eq!(params.angle, 0.0);
    }

    #[test]
    fn anchor_stays_pinned_to_pivot_under_rotation() {
        for angle in [0.0, 0.7, -1.3, std::f32::consts::PI] {
            let bone = sprite_bone(120.0, 30.0, (0.25, 0.75), angle);
            let params = sprite_draw_params(&bone).unwrap();

            // Reconstruct the anchor's world position from the draw params:
            // center + R(angle) * (anchor - center) in sprite space.
            let anchor_from_center = Vector2::new(
                0.25 * 120.0 - 60.0,
                0.75 * 30.0 - 15.0,
            );
            let world_anchor = params.center + Rotation2::new(params.angle) * anchor_from_center;

            assert_relative_eq!(world_anchor.x, bone.position().x, epsilon = 1e-3);
            assert_relative_eq!(world_anchor.y, bone.position().y, epsilon = 1e-3);
        }
    }

    #[test]
    fn joint_markers_follow_bone_ends() {
        let chain = Chain::new(
            ChainParams::fk(0.0, 0.0, vec![80.0]),
            Point2::new(10.0, 20.0),
            &SpriteStore::new(),
        )
        .unwrap();

        let markers = joint_markers(&chain.bones()[0]);
        assert_eq!(markers.pivot, Point2::new(10.0, 20.0));
        assert_relative_eq!(markers.end.x, 90.0, epsilon = 1e-5);
        assert_relative_eq!(markers.end.y, 20.0, epsilon = 1e-5);
        assert!(markers.selected, "root bone starts selected");

        let segment = bone_segment(&chain.bones()[0]);
        assert_eq!(segment.0, markers.pivot);
        assert_eq!(segment.1, markers.end);
    }
}
