//! A named collection of chains anchored at a world position.
//!
//! The skeleton translates local chain offsets into world space and fans
//! out frame updates, picking, and world moves to every owned chain.

use nalgebra::Point2;

use nami2d_core::{FrameInput, RigError, SkeletonConfig};
use nami2d_sprite::SpriteSource;

use crate::chain::{Chain, ChainParams};

/// A named, positioned set of bone chains.
#[derive(Debug, Clone)]
pub struct Skeleton {
    name: String,
    position: Point2<f32>,
    chains: Vec<Chain>,
}

impl Skeleton {
    /// Create an empty skeleton at a world position.
    #[must_use]
    pub fn new(name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            name: name.into(),
            position: Point2::new(x, y),
            chains: Vec::new(),
        }
    }

    /// Build a skeleton and all its chains from configuration, then settle
    /// every chain at its world position (IK chains solve to their initial
    /// targets, FK chains lay out), so the rig starts consistent.
    ///
    /// # Errors
    ///
    /// Returns the first chain construction error. Sprite failures are not
    /// errors (see [`Chain::new`]).
    pub fn from_config(
        config: &SkeletonConfig,
        sprites: &dyn SpriteSource,
    ) -> Result<Self, RigError> {
        let mut skeleton = Self::new(&config.name, config.position[0], config.position[1]);
        for chain_config in &config.chains {
            skeleton.add_chain(ChainParams::from(chain_config), sprites)?;
        }
        let position = skeleton.position;
        for chain in &mut skeleton.chains {
            chain.update_world_positions(position);
        }
        Ok(skeleton)
    }

    /// Skeleton name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// World position.
    #[must_use]
    pub fn position(&self) -> Point2<f32> {
        self.position
    }

    /// The owned chains, in update order.
    #[must_use]
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Mutable access to the owned chains (mode switching, direct posing).
    pub fn chains_mut(&mut self) -> &mut [Chain] {
        &mut self.chains
    }

    /// Construct a new chain anchored to this skeleton and take ownership
    /// of it. Returns a reference to the added chain.
    ///
    /// # Errors
    ///
    /// Propagates [`Chain::new`] errors.
    pub fn add_chain(
        &mut self,
        params: ChainParams,
        sprites: &dyn SpriteSource,
    ) -> Result<&mut Chain, RigError> {
        let chain = Chain::new(params, self.position, sprites)?;
        let index = self.chains.len();
        self.chains.push(chain);
        Ok(&mut self.chains[index])
    }

    /// Move by a delta and re-anchor every chain.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.position.x += dx;
        self.position.y += dy;
        self.reanchor_chains();
    }

    /// Jump to an absolute position and re-anchor every chain.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Point2::new(x, y);
        self.reanchor_chains();
    }

    fn reanchor_chains(&mut self) {
        let position = self.position;
        for chain in &mut self.chains {
            chain.update_world_positions(position);
        }
    }

    /// Run one frame on every chain, in order.
    pub fn update(&mut self, input: &FrameInput) {
        let position = self.position;
        for chain in &mut self.chains {
            chain.update(input, position);
        }
    }

    /// Try to pick a bone in each chain in order, stopping at the first
    /// hit. Returns whether anything was picked.
    pub fn select_bone(&mut self, mx: f32, my: f32) -> bool {
        self.chains.iter_mut().any(|chain| chain.select_bone(mx, my))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nami2d_core::SimTime;
    use nami2d_sprite::SpriteStore;

    fn two_chain_skeleton() -> Skeleton {
        let store = SpriteStore::new();
        let mut skeleton = Skeleton::new("demo", 100.0, 200.0);
        skeleton
            .add_chain(ChainParams::fk(0.0, 0.0, vec![80.0, 70.0, 60.0]), &store)
            .unwrap();
        skeleton
            .add_chain(ChainParams::ik(50.0, 10.0, vec![50.0, 50.0]), &store)
            .unwrap();
        skeleton
    }

    #[test]
    fn chains_anchor_at_skeleton_plus_offset() {
        let skeleton = two_chain_skeleton();
        let fk_root = skeleton.chains()[0].bones()[0].position();
        assert_relative_eq!(fk_root.x, 100.0);
        assert_relative_eq!(fk_root.y, 200.0);

        let ik_root = skeleton.chains()[1].bones()[0].position();
        assert_relative_eq!(ik_root.x, 150.0);
        assert_relative_eq!(ik_root.y, 210.0);
    }

    #[test]
    fn move_round_trip_restores_root_pivot() {
        let mut skeleton = two_chain_skeleton();
        let before = skeleton.chains()[0].bones()[0].position();

        skeleton.move_by(37.0, -12.0);
        skeleton.move_by(-37.0, 12.0);

        let after = skeleton.chains()[0].bones()[0].position();
        assert_eq!(after, before);
    }

    #[test]
    fn set_position_reanchors_all_chains() {
        let mut skeleton = two_chain_skeleton();
        skeleton.set_position(0.0, 0.0);

        assert_relative_eq!(skeleton.chains()[0].bones()[0].position().x, 0.0);
        assert_relative_eq!(skeleton.chains()[1].bones()[0].position().x, 50.0);
        assert_relative_eq!(skeleton.chains()[1].bones()[0].position().y, 10.0);
    }

    #[test]
    fn update_fans_out_to_every_chain() {
        let mut skeleton = two_chain_skeleton();
        let input = FrameInput::new(SimTime::from_secs(0.5), 0.0, 0.0);
        skeleton.update(&input);

        // The FK chain took its procedural pose...
        let t = 0.5_f32;
        assert_relative_eq!(
            skeleton.chains()[0].bones()[0].angle(),
            (t * 2.0).sin() * 0.5,
            epsilon = 1e-5
        );
        // ...and the IK chain's target started orbiting its own origin.
        let target = skeleton.chains()[1].target();
        assert_relative_eq!(target.x, 150.0 + 100.0 + (t * 2.0).cos() * 80.0, epsilon = 1e-4);
    }

    #[test]
    fn select_bone_stops_at_first_hit() {
        let mut skeleton = two_chain_skeleton();
        // On the FK chain's first segment.
        assert!(skeleton.select_bone(120.0, 200.0));
        assert_eq!(skeleton.chains()[0].selected_index(), 0);

        // Far away from everything.
        assert!(!skeleton.select_bone(-500.0, -500.0));
    }

    #[test]
    fn from_config_builds_and_settles() {
        let config: SkeletonConfig = toml::from_str(
            r#"
            name = "hero"
            position = [300.0, 300.0]

            [[chains]]
            lengths = [100.0, 100.0]
            ik = true

            [[chains]]
            offset = [0.0, 40.0]
            lengths = [80.0, 70.0, 60.0]
            "#,
        )
        .unwrap();

        let skeleton = Skeleton::from_config(&config, &SpriteStore::new()).unwrap();
        assert_eq!(skeleton.name(), "hero");
        assert_eq!(skeleton.chains().len(), 2);

        // Settled: the IK chain solved to its full-reach target.
        let tip = skeleton.chains()[0].bones().last().unwrap().end_position();
        assert_relative_eq!(tip.x, 500.0, epsilon = 1e-3);
        assert_relative_eq!(tip.y, 300.0, epsilon = 1e-3);

        // The FK chain laid out from its offset origin.
        let fk_root = skeleton.chains()[1].bones()[0].position();
        assert_relative_eq!(fk_root.x, 300.0);
        assert_relative_eq!(fk_root.y, 340.0);
    }

    #[test]
    fn from_config_rejects_empty_chain() {
        let config: SkeletonConfig = toml::from_str(
            r#"
            name = "bad"
            [[chains]]
            lengths = []
            "#,
        )
        .unwrap();
        assert!(Skeleton::from_config(&config, &SpriteStore::new()).is_err());
    }
}
