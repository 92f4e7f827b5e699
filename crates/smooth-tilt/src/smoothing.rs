//! Orientation smoothing.

use glam::Quat;

/// Move `current` toward `target` by one smoothing step.
///
/// Spherical interpolation with factor `smoothness * dt`, clamped to
/// `[0, 1]`. This is a first-order low-pass on orientation: a rate of 0
/// never moves, a large enough rate snaps to the target in one step. No
/// damping or overshoot.
#[must_use]
pub fn step_orientation(current: Quat, target: Quat, smoothness: f32, dt: f32) -> Quat {
    let t = (smoothness * dt).clamp(0.0, 1.0);
    current.slerp(target, t)
}
