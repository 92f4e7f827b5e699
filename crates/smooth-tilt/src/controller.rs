//! The tilt controller: per-tick input to target orientation.

use glam::{EulerRot, Quat, Vec2, Vec3};

use crate::bounds::ScreenRect;
use crate::config::{ResolvedMode, TiltConfig};
use crate::error::TiltResult;
use crate::input::InputSample;
use crate::mapping::map_range;

/// Maps per-tick input samples to a bounded target orientation.
///
/// The controller owns the center rotation baseline and the accumulated
/// pitch/yaw state. It produces *target* orientations only; committing them
/// to an object (with [`step_orientation`](crate::step_orientation))
/// is the caller's job, so the controller stays independent of any engine.
///
/// All angles are Euler degrees: `x` is pitch, `y` is yaw, roll is held at
/// zero in every target.
#[derive(Debug, Clone)]
pub struct TiltController {
    config: TiltConfig,
    mode: ResolvedMode,
    center: Vec3,
    x_rot: f32,
    y_rot: f32,
}

impl TiltController {
    /// Create a controller, capturing `initial_rotation` as the center
    /// baseline.
    ///
    /// The operating mode is resolved exactly once here;
    /// `has_bounds_source` reports whether the caller can supply projected
    /// object bounds (see [`TiltConfig::resolve`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(
        config: TiltConfig,
        initial_rotation: Vec3,
        has_bounds_source: bool,
    ) -> TiltResult<Self> {
        config.validate()?;
        let mode = config.resolve(has_bounds_source);
        Ok(Self {
            mode,
            center: initial_rotation,
            x_rot: initial_rotation.x,
            y_rot: initial_rotation.y,
            config,
        })
    }

    /// The mode fixed at construction.
    #[must_use]
    pub fn mode(&self) -> ResolvedMode {
        self.mode
    }

    /// The configuration supplied at construction.
    #[must_use]
    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    /// The center rotation baseline (pitch/yaw/roll degrees).
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Current target pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.x_rot
    }

    /// Current target yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.y_rot
    }

    /// Run one tick of the pipeline: map the sample into pitch/yaw state and
    /// return the resulting target orientation.
    ///
    /// `domain` is the screen-space mapping rectangle for pointer input: the
    /// whole screen, or the object's projected bounds in bounds mode. A
    /// pointer outside the domain, a missing pointer, and a degenerate
    /// (zero-size) domain all reset the target to the center baseline
    /// rather than extrapolating.
    pub fn target(&mut self, sample: InputSample, domain: ScreenRect) -> Quat {
        match sample {
            InputSample::Axes {
                horizontal,
                vertical,
            } if self.mode == ResolvedMode::ScreenAxes => {
                self.accumulate_axes(horizontal, vertical);
            }
            InputSample::Pointer { position } if self.mode.uses_pointer() => {
                if domain.is_degenerate() || !domain.contains(position) {
                    self.reset_to_center();
                } else {
                    self.map_pointer(position, domain);
                }
            }
            InputSample::NoPointer if self.mode.uses_pointer() => {
                self.reset_to_center();
            }
            other => {
                // A sample of the wrong kind for the resolved mode; the
                // adapter is misbehaving. Hold the current target.
                tracing::debug!(mode = ?self.mode, sample = ?other, "ignoring mismatched sample");
            }
        }
        self.target_orientation()
    }

    /// Set a new center baseline and reset stored pitch/yaw to match it.
    pub fn recenter(&mut self, orientation: Vec3) {
        self.center = orientation;
        self.x_rot = orientation.x;
        self.y_rot = orientation.y;
    }

    /// The target orientation for the current pitch/yaw state, roll zero.
    #[must_use]
    pub fn target_orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.y_rot.to_radians(),
            self.x_rot.to_radians(),
            0.0,
        )
    }

    /// Integrate axis input into pitch/yaw, then clamp around the center.
    fn accumulate_axes(&mut self, horizontal: f32, vertical: f32) {
        let h_step = self.config.horizontal_speed * horizontal;
        let v_step = self.config.vertical_speed * vertical;
        if self.config.invert_y {
            self.y_rot -= h_step;
        } else {
            self.y_rot += h_step;
        }
        if self.config.invert_x {
            self.x_rot += v_step;
        } else {
            self.x_rot -= v_step;
        }

        if self.config.reset_on_no_input && horizontal == 0.0 && vertical == 0.0 {
            self.reset_to_center();
        }

        let range = self.config.tilt_range;
        self.y_rot = self
            .y_rot
            .clamp(self.center.y - range, self.center.y + range);
        self.x_rot = self
            .x_rot
            .clamp(self.center.x - range, self.center.x + range);
    }

    /// Map a pointer position inside `domain` linearly onto the tilt range.
    ///
    /// Inversion swaps which domain edge maps to which rotation extreme.
    fn map_pointer(&mut self, position: Vec2, domain: ScreenRect) {
        let range = self.config.tilt_range;
        let (y_lo, y_hi) = if self.config.invert_y {
            (self.center.y + range, self.center.y - range)
        } else {
            (self.center.y - range, self.center.y + range)
        };
        self.y_rot = map_range(position.x, domain.min.x, domain.max.x, y_lo, y_hi);

        let (x_lo, x_hi) = if self.config.invert_x {
            (self.center.x - range, self.center.x + range)
        } else {
            (self.center.x + range, self.center.x - range)
        };
        self.x_rot = map_range(position.y, domain.min.y, domain.max.y, x_lo, x_hi);
    }

    fn reset_to_center(&mut self) {
        self.x_rot = self.center.x;
        self.y_rot = self.center.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Input;
    use glam::Vec2;
    use proptest::prelude::*;

    fn pointer_config() -> TiltConfig {
        TiltConfig {
            tilt_range: 10.0,
            ..TiltConfig::default()
        }
    }

    fn axes_config() -> TiltConfig {
        TiltConfig {
            input: Input::Axes,
            horizontal_speed: 1.0,
            vertical_speed: 1.0,
            tilt_range: 10.0,
            ..TiltConfig::default()
        }
    }

    fn domain_100() -> ScreenRect {
        ScreenRect::screen(100.0, 100.0)
    }

    #[test]
    fn test_direct_mapping_boundaries() {
        let center = Vec3::new(4.0, -3.0, 0.0);
        let mut controller = TiltController::new(pointer_config(), center, false).unwrap();

        // Just inside the low corner: yaw approaches center - range and
        // pitch approaches center + range (low pointer y tilts up).
        controller.target(InputSample::pointer(1e-3, 1e-3), domain_100());
        assert!((controller.yaw() - (center.y - 10.0)).abs() < 1e-3);
        assert!((controller.pitch() - (center.x + 10.0)).abs() < 1e-3);

        controller.target(InputSample::pointer(100.0 - 1e-3, 100.0 - 1e-3), domain_100());
        assert!((controller.yaw() - (center.y + 10.0)).abs() < 1e-3);
        assert!((controller.pitch() - (center.x - 10.0)).abs() < 1e-3);

        controller.target(InputSample::pointer(50.0, 50.0), domain_100());
        assert!((controller.yaw() - center.y).abs() < 1e-5);
        assert!((controller.pitch() - center.x).abs() < 1e-5);
    }

    #[test]
    fn test_pointer_outside_domain_resets() {
        let center = Vec3::new(2.0, 7.0, 0.0);
        let mut controller = TiltController::new(pointer_config(), center, false).unwrap();
        controller.target(InputSample::pointer(25.0, 75.0), domain_100());
        assert!((controller.yaw() - center.y).abs() > 1.0);

        controller.target(InputSample::pointer(150.0, 50.0), domain_100());
        assert!((controller.pitch() - center.x).abs() < 1e-6);
        assert!((controller.yaw() - center.y).abs() < 1e-6);
    }

    #[test]
    fn test_no_pointer_resets() {
        let center = Vec3::new(0.0, 0.0, 0.0);
        let mut controller = TiltController::new(pointer_config(), center, false).unwrap();
        controller.target(InputSample::pointer(10.0, 10.0), domain_100());
        controller.target(InputSample::NoPointer, domain_100());
        assert!(controller.pitch().abs() < 1e-6);
        assert!(controller.yaw().abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_domain_is_no_input() {
        let center = Vec3::new(1.0, 2.0, 0.0);
        let mut controller = TiltController::new(pointer_config(), center, false).unwrap();
        let degenerate = ScreenRect::new(Vec2::new(50.0, 0.0), Vec2::new(50.0, 100.0));
        let target = controller.target(InputSample::pointer(50.0, 50.0), degenerate);
        assert!((controller.pitch() - center.x).abs() < 1e-6);
        assert!((controller.yaw() - center.y).abs() < 1e-6);
        assert!(target.is_finite());
    }

    #[test]
    fn test_axes_accumulate_and_clamp() {
        let center = Vec3::new(0.0, 0.0, 0.0);
        let mut controller = TiltController::new(axes_config(), center, false).unwrap();
        // One tick of full horizontal input adds horizontal_speed degrees of yaw.
        controller.target(InputSample::axes(1.0, 0.0), domain_100());
        assert!((controller.yaw() - 1.0).abs() < 1e-6);
        // Saturates at the tilt range no matter how long it is held.
        for _ in 0..100 {
            controller.target(InputSample::axes(1.0, 0.0), domain_100());
        }
        assert!((controller.yaw() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_axes_vertical_sign() {
        let mut controller =
            TiltController::new(axes_config(), Vec3::ZERO, false).unwrap();
        // Positive vertical input tilts the pitch down (negative).
        controller.target(InputSample::axes(0.0, 1.0), domain_100());
        assert!((controller.pitch() - -1.0).abs() < 1e-6);
    }

    #[test]
    fn test_reset_on_no_input() {
        let center = Vec3::new(3.0, -2.0, 0.0);
        let config = TiltConfig {
            reset_on_no_input: true,
            ..axes_config()
        };
        let mut controller = TiltController::new(config, center, false).unwrap();
        for _ in 0..5 {
            controller.target(InputSample::axes(1.0, -1.0), domain_100());
        }
        assert!((controller.yaw() - center.y).abs() > 1.0);

        controller.target(InputSample::axes(0.0, 0.0), domain_100());
        assert!((controller.pitch() - center.x).abs() < 1e-6);
        assert!((controller.yaw() - center.y).abs() < 1e-6);
    }

    #[test]
    fn test_zero_axes_without_reset_flag_holds() {
        let mut controller =
            TiltController::new(axes_config(), Vec3::ZERO, false).unwrap();
        for _ in 0..3 {
            controller.target(InputSample::axes(1.0, 0.0), domain_100());
        }
        let held = controller.yaw();
        controller.target(InputSample::axes(0.0, 0.0), domain_100());
        assert!((controller.yaw() - held).abs() < 1e-6);
    }

    #[test]
    fn test_recenter_idempotence() {
        let mut controller =
            TiltController::new(axes_config(), Vec3::ZERO, false).unwrap();
        for _ in 0..10 {
            controller.target(InputSample::axes(1.0, 1.0), domain_100());
        }
        let new_center = Vec3::new(5.0, -8.0, 0.0);
        controller.recenter(new_center);
        let target = controller.target(InputSample::axes(0.0, 0.0), domain_100());
        assert!((controller.pitch() - new_center.x).abs() < 1e-6);
        assert!((controller.yaw() - new_center.y).abs() < 1e-6);
        let expected = Quat::from_euler(
            EulerRot::YXZ,
            new_center.y.to_radians(),
            new_center.x.to_radians(),
            0.0,
        );
        assert!(target.angle_between(expected) < 1e-5);
    }

    #[test]
    fn test_target_orientation_has_zero_roll() {
        let mut controller =
            TiltController::new(pointer_config(), Vec3::ZERO, false).unwrap();
        let target = controller.target(InputSample::pointer(80.0, 20.0), domain_100());
        let (_, _, roll) = target.to_euler(EulerRot::YXZ);
        assert!(roll.abs() < 1e-5);
    }

    proptest! {
        /// Pitch and yaw never leave `[center ± tilt_range]` for any axis
        /// tick sequence.
        #[test]
        fn prop_axis_clamp_invariant(
            ticks in prop::collection::vec((-1.0f32..=1.0, -1.0f32..=1.0), 1..100),
            horizontal_speed in 0.0f32..5.0,
            vertical_speed in 0.0f32..5.0,
            tilt_range in 0.0f32..45.0,
        ) {
            let center = Vec3::new(12.0, -7.0, 0.0);
            let config = TiltConfig {
                input: Input::Axes,
                horizontal_speed,
                vertical_speed,
                tilt_range,
                ..TiltConfig::default()
            };
            let mut controller = TiltController::new(config, center, false).unwrap();
            for (h, v) in ticks {
                controller.target(InputSample::axes(h, v), domain_100());
                prop_assert!(controller.yaw() >= center.y - tilt_range - 1e-4);
                prop_assert!(controller.yaw() <= center.y + tilt_range + 1e-4);
                prop_assert!(controller.pitch() >= center.x - tilt_range - 1e-4);
                prop_assert!(controller.pitch() <= center.x + tilt_range + 1e-4);
            }
        }

        /// Flipping an inversion flag negates the mapped offset from center
        /// for the same pointer position.
        #[test]
        fn prop_inversion_symmetry(
            px in 0.01f32..99.99,
            py in 0.01f32..99.99,
            tilt_range in 0.1f32..45.0,
        ) {
            let center = Vec3::new(3.0, 9.0, 0.0);
            let base = TiltConfig { tilt_range, ..TiltConfig::default() };
            let flipped = TiltConfig {
                invert_x: true,
                invert_y: true,
                ..base.clone()
            };
            let mut plain = TiltController::new(base, center, false).unwrap();
            let mut inverted = TiltController::new(flipped, center, false).unwrap();
            plain.target(InputSample::pointer(px, py), domain_100());
            inverted.target(InputSample::pointer(px, py), domain_100());

            let yaw_offset = plain.yaw() - center.y;
            let pitch_offset = plain.pitch() - center.x;
            prop_assert!((inverted.yaw() - center.y + yaw_offset).abs() < 1e-3);
            prop_assert!((inverted.pitch() - center.x + pitch_offset).abs() < 1e-3);
        }

        /// A pointer outside any domain resets the target to center.
        #[test]
        fn prop_out_of_domain_resets(
            width in 1.0f32..2000.0,
            height in 1.0f32..2000.0,
            offset in 0.0f32..500.0,
            tilt_range in 0.0f32..45.0,
        ) {
            let center = Vec3::new(-4.0, 6.0, 0.0);
            let config = TiltConfig { tilt_range, ..TiltConfig::default() };
            let mut controller = TiltController::new(config, center, false).unwrap();
            let domain = ScreenRect::screen(width, height);
            // Disturb the state first so the reset is observable.
            controller.target(
                InputSample::pointer(width * 0.25, height * 0.25),
                domain,
            );
            controller.target(
                InputSample::pointer(width + offset, height / 2.0),
                domain,
            );
            prop_assert!((controller.pitch() - center.x).abs() < 1e-6);
            prop_assert!((controller.yaw() - center.y).abs() < 1e-6);
        }
    }
}
