/// Default smoothing time of the spring-back, in seconds.
pub const DEFAULT_ELASTICITY: f32 = 0.1;

/// Distance below which the spring snaps onto its target.
const SNAP_DISTANCE: f32 = 0.1;

/// Resistance applied to a drag past a resting edge.
///
/// Maps a raw overscroll distance to the displayed one. The result keeps the sign of `overscroll`,
/// grows monotonically with it and never exceeds `view_size`.
pub fn rubber_delta(overscroll: f32, view_size: f32) -> f32 {
    if overscroll == 0.0 || view_size <= 0.0 {
        return 0.0;
    }
    let magnitude = if overscroll < 0.0 { -overscroll } else { overscroll };
    let resisted = (1.0 - 1.0 / (magnitude * 0.55 / view_size + 1.0)) * view_size;
    if overscroll < 0.0 { -resisted } else { resisted }
}

/// A critically damped spring that pulls an overscrolled offset back to its resting position.
///
/// Uses the polynomial approximation of `exp(-x)`, so it stays usable without `std`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringBack {
    /// Approximate time to reach the target, in seconds.
    pub smooth_time: f32,
    velocity: f32,
}

impl Default for SpringBack {
    fn default() -> Self {
        Self::new(DEFAULT_ELASTICITY)
    }
}

impl SpringBack {
    pub fn new(smooth_time: f32) -> Self {
        Self {
            smooth_time,
            velocity: 0.0,
        }
    }

    /// Current velocity in units per second.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn reset(&mut self) {
        self.velocity = 0.0;
    }

    /// Advances the spring by `dt_ms` and returns the new offset.
    ///
    /// Never overshoots `target`, and snaps onto it once closer than a tenth of a unit.
    pub fn step(&mut self, current: f32, target: f32, dt_ms: u64) -> f32 {
        if dt_ms == 0 {
            return current;
        }
        let dt = dt_ms as f32 / 1000.0;
        let smooth_time = self.smooth_time.max(0.0001);
        let omega = 2.0 / smooth_time;
        let x = omega * dt;
        let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let change = current - target;
        let temp = (self.velocity + omega * change) * dt;
        self.velocity = (self.velocity - omega * temp) * decay;
        let mut next = target + (change + temp) * decay;

        if (target > current) == (next > target) {
            next = target;
        }
        let remaining = next - target;
        if (if remaining < 0.0 { -remaining } else { remaining }) < SNAP_DISTANCE {
            next = target;
        }
        if next == target {
            self.velocity = 0.0;
        }
        next
    }
}
