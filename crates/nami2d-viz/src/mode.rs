//! Render-layer visibility cycling.
//!
//! Purely a hint for the renderer; simulation never reads it.

/// Which rig layers the renderer should surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VisibilityMode {
    /// Sprites, joint markers, and connecting lines.
    #[default]
    All,
    SpritesOnly,
    SpritesAndJoints,
    JointsOnly,
    JointsAndLines,
    LinesOnly,
}

impl VisibilityMode {
    /// Human-readable label for UI display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::SpritesOnly => "Sprites Only",
            Self::SpritesAndJoints => "Sprites + Joints",
            Self::JointsOnly => "Joints Only",
            Self::JointsAndLines => "Joints + Lines",
            Self::LinesOnly => "Lines Only",
        }
    }

    /// The next mode in the cycle (wraps from `LinesOnly` to `All`).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::SpritesOnly,
            Self::SpritesOnly => Self::SpritesAndJoints,
            Self::SpritesAndJoints => Self::JointsOnly,
            Self::JointsOnly => Self::JointsAndLines,
            Self::JointsAndLines => Self::LinesOnly,
            Self::LinesOnly => Self::All,
        }
    }

    /// Whether bone sprites are drawn.
    #[must_use]
    pub const fn shows_sprites(self) -> bool {
        matches!(self, Self::All | Self::SpritesOnly | Self::SpritesAndJoints)
    }

    /// Whether pivot/end joint markers are drawn.
    #[must_use]
    pub const fn shows_joints(self) -> bool {
        matches!(
            self,
            Self::All | Self::SpritesAndJoints | Self::JointsOnly | Self::JointsAndLines
        )
    }

    /// Whether the pivot-to-end connecting lines are drawn.
    #[must_use]
    pub const fn shows_lines(self) -> bool {
        matches!(self, Self::All | Self::JointsAndLines | Self::LinesOnly)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_all_modes_and_wraps() {
        let mut mode = VisibilityMode::All;
        let mut seen = vec![mode];
        for _ in 0..5 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(mode.next(), VisibilityMode::All);
    }

    #[test]
    fn layer_truth_table() {
        use VisibilityMode as V;
        let expect = [
            (V::All, true, true, true),
            (V::SpritesOnly, true, false, false),
            (V::SpritesAndJoints, true, true, false),
            (V::JointsOnly, false, true, false),
            (V::JointsAndLines, false, true, true),
            (V::LinesOnly, false, false, true),
        ];
        for (mode, sprites, joints, lines) in expect {
            assert_eq!(mode.shows_sprites(), sprites, "{}", mode.label());
            assert_eq!(mode.shows_joints(), joints, "{}", mode.label());
            assert_eq!(mode.shows_lines(), lines, "{}", mode.label());
        }
    }
}
