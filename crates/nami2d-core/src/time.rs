use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SimTime
// ---------------------------------------------------------------------------

/// Integer-nanosecond frame clock.
///
/// Avoids floating-point accumulation errors by tracking elapsed time as a
/// monotonically increasing `u64` nanosecond count. The rig reads it as
/// seconds (`secs_f32`) to drive the procedural animation mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct SimTime {
    nanos: u64,
}

impl SimTime {
    /// Create a new `SimTime` at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { nanos: 0 }
    }

    /// Create a `SimTime` from a raw nanosecond count.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Create a `SimTime` from seconds (as `f64`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_secs(secs: f64) -> Self {
        Self {
            nanos: (secs * 1_000_000_000.0) as u64,
        }
    }

    /// Raw nanosecond count.
    #[must_use]
    pub const fn nanos(&self) -> u64 {
        self.nanos
    }

    /// Elapsed seconds as `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn secs_f64(&self) -> f64 {
        self.nanos as f64 / 1_000_000_000.0
    }

    /// Elapsed seconds as `f32`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn secs_f32(&self) -> f32 {
        self.nanos as f32 / 1_000_000_000.0
    }

    /// Convert to a standard [`Duration`].
    #[must_use]
    pub const fn to_duration(&self) -> Duration {
        Duration::from_nanos(self.nanos)
    }

    /// Advance the clock by `delta_nanos` nanoseconds.
    pub const fn advance(&mut self, delta_nanos: u64) {
        self.nanos = self.nanos.saturating_add(delta_nanos);
    }

    /// Advance the clock by `delta_secs` seconds.
    ///
    /// Negative deltas are ignored; the clock is monotonic.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn advance_secs(&mut self, delta_secs: f64) {
        if delta_secs > 0.0 {
            self.advance((delta_secs * 1_000_000_000.0) as u64);
        }
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}s", self.secs_f64())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_is_zero() {
        let t = SimTime::new();
        assert_eq!(t.nanos(), 0);
        assert_relative_eq!(t.secs_f64(), 0.0);
    }

    #[test]
    fn from_secs_roundtrip() {
        let t = SimTime::from_secs(1.5);
        assert_eq!(t.nanos(), 1_500_000_000);
        assert_relative_eq!(t.secs_f32(), 1.5);
    }

    #[test]
    fn advance_accumulates() {
        let mut t = SimTime::new();
        for _ in 0..60 {
            t.advance_secs(1.0 / 60.0);
        }
        // 60 frames of 1/60 s land within a nanosecond-truncation error of 1 s
        assert_relative_eq!(t.secs_f64(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn advance_negative_is_ignored() {
        let mut t = SimTime::from_secs(2.0);
        t.advance_secs(-1.0);
        assert_eq!(t.nanos(), 2_000_000_000);
    }

    #[test]
    fn to_duration_matches() {
        let t = SimTime::from_nanos(123_456_789);
        assert_eq!(t.to_duration(), Duration::from_nanos(123_456_789));
    }

    #[test]
    fn display_formats_seconds() {
        let t = SimTime::from_secs(0.25);
        assert_eq!(t.to_string(), "0.250000s");
    }
}
