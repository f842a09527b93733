//! Filename-driven anchor resolution.
//!
//! Asset pipelines encode which side of a sprite attaches to the pivot in
//! the file name: `arm_l.png` anchors at its right edge, `tail_d.png` at
//! its top, and so on. Resolution is a pure function of the name and the
//! sprite dimensions, with no dependency on any image loader.

use nami2d_sprite::SpriteExtent;

/// Resolve a normalized anchor from a sprite file name.
///
/// Suffix rules (matched case-insensitively on the file stem, extension
/// stripped):
///
/// | suffix          | anchor       | meaning                      |
/// |-----------------|--------------|------------------------------|
/// | `_l` / `_left`  | `(1.0, 0.5)` | left limb, pivot at right    |
/// | `_r` / `_right` | `(0.0, 0.5)` | right limb, pivot at left    |
/// | `_u` / `_up`    | `(0.5, 1.0)` | upward limb, pivot at bottom |
/// | `_d` / `_down`  | `(0.5, 0.0)` | downward limb, pivot at top  |
///
/// Without a recognized suffix, a wide sprite (`width >= height`) anchors
/// at its left-center, a tall one at its top-center. Without dimensions
/// at all, the anchor defaults to left-center.
#[must_use]
pub fn anchor_from_name(name: &str, extent: Option<SpriteExtent>) -> (f32, f32) {
    let lower = name.to_ascii_lowercase();
    let stem = lower
        .rsplit_once('.')
        .map_or(lower.as_str(), |(stem, _ext)| stem);

    if stem.ends_with("_l") || stem.ends_with("_left") {
        (1.0, 0.5)
    } else if stem.ends_with("_r") || stem.ends_with("_right") {
        (0.0, 0.5)
    } else if stem.ends_with("_u") || stem.ends_with("_up") {
        (0.5, 1.0)
    } else if stem.ends_with("_d") || stem.ends_with("_down") {
        (0.5, 0.0)
    } else {
        match extent {
            Some(e) if e.width >= e.height => (0.0, 0.5),
            Some(_) => (0.5, 0.0),
            None => (0.0, 0.5),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: Option<SpriteExtent> = Some(SpriteExtent::new(64.0, 64.0));

    #[test]
    fn directional_suffixes() {
        assert_eq!(anchor_from_name("arm_l.png", SQUARE), (1.0, 0.5));
        assert_eq!(anchor_from_name("arm_left.png", SQUARE), (1.0, 0.5));
        assert_eq!(anchor_from_name("arm_r.png", SQUARE), (0.0, 0.5));
        assert_eq!(anchor_from_name("arm_right.png", SQUARE), (0.0, 0.5));
        assert_eq!(anchor_from_name("ear_u.png", SQUARE), (0.5, 1.0));
        assert_eq!(anchor_from_name("ear_up.png", SQUARE), (0.5, 1.0));
        assert_eq!(anchor_from_name("tail_d.png", SQUARE), (0.5, 0.0));
        assert_eq!(anchor_from_name("tail_down.png", SQUARE), (0.5, 0.0));
    }

    #[test]
    fn suffix_match_is_case_insensitive() {
        assert_eq!(anchor_from_name("ARM_L.PNG", SQUARE), (1.0, 0.5));
        assert_eq!(anchor_from_name("Tail_Down.png", SQUARE), (0.5, 0.0));
    }

    #[test]
    fn dimension_fallback() {
        // Wide: pivot at the left edge; tall: pivot at the top.
        let wide = Some(SpriteExtent::new(120.0, 30.0));
        let tall = Some(SpriteExtent::new(30.0, 120.0));
        assert_eq!(anchor_from_name("torso.png", wide), (0.0, 0.5));
        assert_eq!(anchor_from_name("torso.png", tall), (0.5, 0.0));
        // Ties count as wide.
        assert_eq!(anchor_from_name("torso.png", SQUARE), (0.0, 0.5));
    }

    #[test]
    fn no_extent_defaults_left_center() {
        assert_eq!(anchor_from_name("torso.png", None), (0.0, 0.5));
    }

    #[test]
    fn suffix_checked_on_stem_not_extension() {
        // The extension must not hide the suffix.
        assert_eq!(anchor_from_name("leg_u.tga", SQUARE), (0.5, 1.0));
        // A name whose stem merely contains (not ends with) a marker falls
        // through to the dimension rule.
        assert_eq!(anchor_from_name("club_large.png", SQUARE), (0.0, 0.5));
    }
}
