//! An ordered, owned sequence of bones.
//!
//! A chain is either angle-driven (FK) or target-driven (IK); the flag is
//! fixed at construction. Each frame, [`Chain::update`] dispatches on the
//! active [`ControlMode`] and ends in a call to [`Chain::fk`] or
//! [`Chain::ik`], after which every bone transform is settled for the
//! renderer to read.

use nalgebra::{Point2, Vector2};

use nami2d_core::{ArrowKey, ChainConfig, FrameInput, RigError};
use nami2d_sprite::SpriteSource;

use crate::anchor::anchor_from_name;
use crate::bone::{Bone, DEFAULT_HIT_RADIUS};

/// World units the IK target moves per frame per held arrow key.
const KEY_TARGET_STEP: f32 = 3.0;
/// Radians the selected FK bone rotates per frame per held arrow key.
const KEY_ANGLE_STEP: f32 = 0.05;

// ---------------------------------------------------------------------------
// ControlMode
// ---------------------------------------------------------------------------

/// Per-chain control mode. Externally cycled; switching modes never resets
/// bone state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ControlMode {
    /// Procedural animation driven by elapsed time.
    #[default]
    Animated,
    /// No state change.
    Static,
    /// IK target (or selected FK bone's aim) follows the pointer.
    PointerDriven,
    /// Arrow keys move the IK target or rotate/select FK bones.
    KeyDriven,
}

impl ControlMode {
    /// Human-readable label for UI display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Animated => "Animated",
            Self::Static => "Static",
            Self::PointerDriven => "Pointer",
            Self::KeyDriven => "Keyboard",
        }
    }

    /// The next mode in the cycle (wraps from `KeyDriven` to `Animated`).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Animated => Self::Static,
            Self::Static => Self::PointerDriven,
            Self::PointerDriven => Self::KeyDriven,
            Self::KeyDriven => Self::Animated,
        }
    }
}

// ---------------------------------------------------------------------------
// ChainParams
// ---------------------------------------------------------------------------

/// Construction parameters for a [`Chain`].
///
/// The optional per-bone lists are zipped against the lengths: entries
/// beyond the shorter list are ignored, bones beyond a shorter list keep
/// their defaults. The config layer validates matching counts before
/// anything reaches this type.
#[derive(Debug, Clone, Default)]
pub struct ChainParams {
    /// Chain origin relative to the owning skeleton.
    pub offset: Vector2<f32>,
    /// Authored bone lengths, root to tip.
    pub lengths: Vec<f32>,
    /// Target-driven (IK) rather than angle-driven (FK).
    pub ik: bool,
    /// Explicit world-space pivot per bone; when present, bones are placed
    /// directly and no layout pass runs.
    pub positions: Option<Vec<Point2<f32>>>,
    /// Explicit anchor per bone; suppresses filename-derived anchors.
    pub anchors: Option<Vec<(f32, f32)>>,
    /// Sprite path per bone, resolved through the sprite collaborator.
    pub sprites: Option<Vec<String>>,
}

impl ChainParams {
    /// An FK chain with the given local offset and bone lengths.
    #[must_use]
    pub fn fk(offset_x: f32, offset_y: f32, lengths: Vec<f32>) -> Self {
        Self {
            offset: Vector2::new(offset_x, offset_y),
            lengths,
            ..Self::default()
        }
    }

    /// An IK chain with the given local offset and bone lengths.
    #[must_use]
    pub fn ik(offset_x: f32, offset_y: f32, lengths: Vec<f32>) -> Self {
        Self {
            offset: Vector2::new(offset_x, offset_y),
            lengths,
            ik: true,
            ..Self::default()
        }
    }
}

impl From<&ChainConfig> for ChainParams {
    fn from(config: &ChainConfig) -> Self {
        Self {
            offset: Vector2::new(config.offset[0], config.offset[1]),
            lengths: config.lengths.clone(),
            ik: config.ik,
            positions: config
                .positions
                .as_ref()
                .map(|list| list.iter().map(|p| Point2::new(p[0], p[1])).collect()),
            anchors: config
                .anchors
                .as_ref()
                .map(|list| list.iter().map(|a| (a[0], a[1])).collect()),
            sprites: config.sprites.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Chain
// ---------------------------------------------------------------------------

/// An ordered, owned bone sequence with one control mode and, for IK
/// chains, a world-space target.
#[derive(Debug, Clone)]
pub struct Chain {
    bones: Vec<Bone>,
    is_ik: bool,
    mode: ControlMode,
    /// World-space IK target; meaningful only when `is_ik`.
    target: Point2<f32>,
    /// Chain origin relative to the owning skeleton.
    local_offset: Vector2<f32>,
    /// Index of the picked bone; meaningful only for FK chains.
    selected: usize,
}

impl Chain {
    /// Build a chain at `skeleton_pos + params.offset`.
    ///
    /// Bones are created root to tip; bone `i > 0` back-references bone
    /// `i - 1`. With explicit positions each pivot is set directly and
    /// only the visual cache is recomputed; otherwise a forward pass lays
    /// the chain out from its origin. An IK chain's target starts at the
    /// chain's full reach along +x.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::EmptyChain`] for an empty length list and
    /// [`RigError::InvalidLength`] for a negative or non-finite length.
    /// Sprite failures are not errors: the affected bone keeps its
    /// authored length and takes the default `(0.0, 0.5)` anchor.
    pub fn new(
        params: ChainParams,
        skeleton_pos: Point2<f32>,
        sprites: &dyn SpriteSource,
    ) -> Result<Self, RigError> {
        if params.lengths.is_empty() {
            return Err(RigError::EmptyChain);
        }
        for &length in &params.lengths {
            if !length.is_finite() || length < 0.0 {
                return Err(RigError::InvalidLength(length));
            }
        }

        let origin = skeleton_pos + params.offset;
        let explicit_positions = params.positions.is_some();
        let auto_anchor = params.anchors.is_none();

        let mut bones: Vec<Bone> = Vec::with_capacity(params.lengths.len());
        for (i, &length) in params.lengths.iter().enumerate() {
            let pivot = params
                .positions
                .as_ref()
                .and_then(|list| list.get(i))
                .copied()
                .unwrap_or(origin);
            let mut bone = Bone::new(pivot.x, pivot.y, length);
            if i > 0 {
                bone.parent = Some(i - 1);
            }
            bones.push(bone);
        }

        for (i, bone) in bones.iter_mut().enumerate() {
            if let Some(path) = params.sprites.as_ref().and_then(|list| list.get(i)) {
                match sprites.load(path) {
                    Ok(sprite) => {
                        bone.bind_sprite(sprite);
                        if auto_anchor {
                            let (ax, ay) = anchor_from_name(path, Some(sprite.extent));
                            bone.set_anchor(ax, ay);
                        }
                    }
                    Err(_) => {
                        // Already warned by the source. Authored length
                        // stands; anchor falls back to left-center.
                        bone.set_anchor(0.0, 0.5);
                    }
                }
            }
            if let Some(&(ax, ay)) = params.anchors.as_ref().and_then(|list| list.get(i)) {
                bone.set_anchor(ax, ay);
            }
        }

        bones[0].selected = true;

        let mut chain = Self {
            bones,
            is_ik: params.ik,
            mode: ControlMode::default(),
            target: origin,
            local_offset: params.offset,
            selected: 0,
        };

        if explicit_positions {
            for bone in &mut chain.bones {
                bone.update_visual_position();
            }
        } else {
            chain.fk();
        }

        if chain.is_ik {
            // Full reach along +x, measured after any sprite-width overrides.
            let total: f32 = chain.bones.iter().map(Bone::length).sum();
            chain.target = Point2::new(origin.x + total, origin.y);
        }

        Ok(chain)
    }

    /// The bones, root to tip.
    #[must_use]
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    /// Number of bones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// A chain always has at least one bone.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Whether this chain is target-driven.
    #[must_use]
    pub fn is_ik(&self) -> bool {
        self.is_ik
    }

    /// Active control mode.
    #[must_use]
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Switch control mode. Bone state carries over unchanged.
    pub fn set_mode(&mut self, mode: ControlMode) {
        self.mode = mode;
    }

    /// Advance to the next control mode in the cycle.
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
    }

    /// Current world-space IK target (meaningful only for IK chains).
    #[must_use]
    pub fn target(&self) -> Point2<f32> {
        self.target
    }

    /// Index of the picked bone (meaningful only for FK chains).
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Chain origin relative to the owning skeleton.
    #[must_use]
    pub fn local_offset(&self) -> Vector2<f32> {
        self.local_offset
    }

    /// World origin for a given skeleton position.
    #[must_use]
    pub fn world_origin(&self, skeleton_pos: Point2<f32>) -> Point2<f32> {
        skeleton_pos + self.local_offset
    }

    /// Forward pass: every bone snaps its pivot to its parent's far end,
    /// root to tip, and refreshes its visual cache. After this,
    /// `bones[i + 1].position() == bones[i].end_position()` for all `i`.
    pub fn fk(&mut self) {
        for i in 0..self.bones.len() {
            if let Some(parent) = self.bones[i].parent {
                let parent_end = self.bones[parent].end_position();
                self.bones[i].propagate_from(parent_end);
            } else {
                self.bones[i].update_visual_position();
            }
        }
    }

    /// Single-pass FABRIK-style reach toward `(tx, ty)`.
    ///
    /// One backward sweep pulls the chain onto the target from the tip
    /// inward; the root is then pinned back to its saved pivot and one
    /// forward sweep restores connectivity. This is deliberately not
    /// iterated to a convergence tolerance: the tip hits the target
    /// exactly only for a single bone or a collinear two-bone reach, and
    /// approximates it otherwise (including every unreachable target).
    pub fn ik(&mut self, tx: f32, ty: f32) {
        let base = self.bones[0].position;
        let last = self.bones.len() - 1;

        // Backward: tip reaches the target, each earlier bone reaches the
        // pivot of its successor.
        self.bones[last].reach_toward(tx, ty);
        for i in (0..last).rev() {
            let next_pivot = self.bones[i + 1].position;
            self.bones[i].reach_toward(next_pivot.x, next_pivot.y);
        }

        // The root is fixed in world space.
        self.bones[0].position = base;
        self.bones[0].update_visual_position();

        // Forward: re-chain each bone onto its predecessor's far end,
        // keeping the direction the backward sweep produced.
        for i in 1..self.bones.len() {
            let prev_end = self.bones[i - 1].end_position();
            let dir = self.bones[i].end_position() - prev_end;
            let dist = dir.norm();
            if dist > 0.0 {
                self.bones[i].position = prev_end;
                self.bones[i].angle = dir.y.atan2(dir.x);
                self.bones[i].update_visual_position();
            }
        }
    }

    /// Pick the first bone whose segment lies under `(mx, my)`,
    /// deselecting the rest. IK chains have no per-bone picking; the call
    /// is a no-op returning `false`.
    pub fn select_bone(&mut self, mx: f32, my: f32) -> bool {
        if self.is_ik {
            return false;
        }
        let hit = (0..self.bones.len())
            .find(|&i| self.bones[i].hit_test(mx, my, DEFAULT_HIT_RADIUS));
        if let Some(index) = hit {
            for bone in &mut self.bones {
                bone.selected = false;
            }
            self.bones[index].selected = true;
            self.selected = index;
            return true;
        }
        false
    }

    /// Run one frame of the active control mode, ending in `fk` or `ik`.
    pub fn update(&mut self, input: &FrameInput, skeleton_pos: Point2<f32>) {
        match self.mode {
            ControlMode::Animated => self.update_animated(input.secs(), skeleton_pos),
            ControlMode::Static => {}
            ControlMode::PointerDriven => self.update_pointer(input.pointer),
            ControlMode::KeyDriven => self.update_keys(&input.keys),
        }
    }

    /// Procedural mode: the IK target orbits the chain origin; FK bones
    /// swing on fixed sine curves (only the first three — extra bones keep
    /// their angles).
    fn update_animated(&mut self, t: f32, skeleton_pos: Point2<f32>) {
        if self.is_ik {
            let origin = self.world_origin(skeleton_pos);
            self.target = Point2::new(
                origin.x + 100.0 + (t * 2.0).cos() * 80.0,
                origin.y + (t * 3.0).sin() * 40.0,
            );
            let target = self.target;
            self.ik(target.x, target.y);
        } else {
            let angles = [
                (t * 2.0).sin() * 0.5,
                (t * 3.0).sin() * 0.7,
                (t * 4.0).sin() * 0.9,
            ];
            for (bone, angle) in self.bones.iter_mut().zip(angles) {
                bone.angle = angle;
            }
            self.fk();
        }
    }

    fn update_pointer(&mut self, pointer: Point2<f32>) {
        if self.is_ik {
            self.target = pointer;
            self.ik(pointer.x, pointer.y);
        } else {
            let bone = &mut self.bones[self.selected];
            bone.angle = (pointer.y - bone.position.y).atan2(pointer.x - bone.position.x);
            self.fk();
        }
    }

    fn update_keys(&mut self, keys: &nami2d_core::PressedKeys) {
        if self.is_ik {
            if keys.is_pressed(ArrowKey::Left) {
                self.target.x -= KEY_TARGET_STEP;
            }
            if keys.is_pressed(ArrowKey::Right) {
                self.target.x += KEY_TARGET_STEP;
            }
            if keys.is_pressed(ArrowKey::Up) {
                self.target.y -= KEY_TARGET_STEP;
            }
            if keys.is_pressed(ArrowKey::Down) {
                self.target.y += KEY_TARGET_STEP;
            }
            let target = self.target;
            self.ik(target.x, target.y);
        } else {
            if keys.is_pressed(ArrowKey::Left) {
                self.bones[self.selected].angle -= KEY_ANGLE_STEP;
            }
            if keys.is_pressed(ArrowKey::Right) {
                self.bones[self.selected].angle += KEY_ANGLE_STEP;
            }
            if keys.is_pressed(ArrowKey::Up) {
                self.cycle_selection(-1);
            }
            if keys.is_pressed(ArrowKey::Down) {
                self.cycle_selection(1);
            }
            self.fk();
        }
    }

    /// Move the pick by `delta` bones, wrapping at both ends.
    fn cycle_selection(&mut self, delta: isize) {
        self.bones[self.selected].selected = false;
        let count = self.bones.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(count) as usize;
        self.bones[self.selected].selected = true;
    }

    /// Re-anchor the chain after the owning skeleton moved: the root pivot
    /// snaps to the new world origin, then an IK chain re-solves to its
    /// existing target (a world-space point that does not move with the
    /// skeleton) and an FK chain re-propagates.
    pub fn update_world_positions(&mut self, skeleton_pos: Point2<f32>) {
        let origin = self.world_origin(skeleton_pos);
        self.bones[0].position = origin;
        self.bones[0].update_visual_position();

        if self.is_ik {
            let target = self.target;
            self.ik(target.x, target.y);
        } else {
            self.fk();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
