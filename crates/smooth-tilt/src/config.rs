//! Tilt effect configuration and one-time mode resolution.

use crate::error::{TiltError, TiltResult};

/// Which screen-space region the pointer position is mapped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Domain {
    /// The whole screen.
    #[default]
    Screen,
    /// The object's own projected screen-space bounds.
    ObjectBounds,
}

/// Which input source drives the tilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Input {
    /// Pointer or touch position in screen space.
    #[default]
    Pointer,
    /// Two named analog axes (gamepad stick, keyboard axis pair).
    Axes,
}

/// Configuration for a [`TiltController`](crate::TiltController).
///
/// Supplied once at construction; the controller never mutates it.
/// Defaults match the reference component: half-speed axes, smoothness 1,
/// a 5 degree tilt range, and the conventional "Horizontal"/"Vertical"
/// axis names.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltConfig {
    /// Requested mapping domain for pointer input.
    pub domain: Domain,
    /// Input source driving the effect.
    pub input: Input,
    /// Invert the tilt on the X (pitch) axis.
    pub invert_x: bool,
    /// Invert the tilt on the Y (yaw) axis.
    pub invert_y: bool,
    /// Speed multiplier for the horizontal axis (axes input only).
    pub horizontal_speed: f32,
    /// Speed multiplier for the vertical axis (axes input only).
    pub vertical_speed: f32,
    /// Smoothing rate for the committed orientation. 0 never moves,
    /// large values snap.
    pub smoothness: f32,
    /// Symmetric tilt range in degrees, applied to both axes around the
    /// center rotation.
    pub tilt_range: f32,
    /// Snap the target back to center when both axes read zero.
    pub reset_on_no_input: bool,
    /// Name of the axis driving yaw, resolved by the platform adapter.
    pub horizontal_axis: String,
    /// Name of the axis driving pitch, resolved by the platform adapter.
    pub vertical_axis: String,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            domain: Domain::Screen,
            input: Input::Pointer,
            invert_x: false,
            invert_y: false,
            horizontal_speed: 0.5,
            vertical_speed: 0.5,
            smoothness: 1.0,
            tilt_range: 5.0,
            reset_on_no_input: false,
            horizontal_axis: "Horizontal".to_string(),
            vertical_axis: "Vertical".to_string(),
        }
    }
}

impl TiltConfig {
    /// Validate the numeric and axis-name fields.
    ///
    /// # Errors
    ///
    /// Returns an error if an axis name is empty while axes input is
    /// requested, or if `tilt_range` or `smoothness` is negative or not
    /// finite.
    pub fn validate(&self) -> TiltResult<()> {
        if self.input == Input::Axes {
            if self.horizontal_axis.is_empty() {
                return Err(TiltError::EmptyAxisName {
                    which: "horizontal",
                });
            }
            if self.vertical_axis.is_empty() {
                return Err(TiltError::EmptyAxisName { which: "vertical" });
            }
        }
        check_finite_non_negative("tilt_range", self.tilt_range)?;
        check_finite_non_negative("smoothness", self.smoothness)?;
        Ok(())
    }

    /// Resolve the requested domain/input combination into an immutable mode.
    ///
    /// Contradictory requests are normalized once, here, instead of flags
    /// flipping mid-operation:
    /// - axes input always maps against the whole screen, so a bounds
    ///   domain is demoted;
    /// - a bounds domain without any bounds source falls back to the
    ///   screen domain.
    ///
    /// Both fallbacks log a warning and continue.
    #[must_use]
    pub fn resolve(&self, has_bounds_source: bool) -> ResolvedMode {
        match (self.domain, self.input) {
            (_, Input::Axes) => {
                if self.domain == Domain::ObjectBounds {
                    tracing::warn!(
                        "axes input maps against the whole screen; ignoring the bounds domain"
                    );
                }
                ResolvedMode::ScreenAxes
            }
            (Domain::ObjectBounds, Input::Pointer) => {
                if has_bounds_source {
                    ResolvedMode::BoundsPointer
                } else {
                    tracing::warn!(
                        "the bounds domain requires a projectable surface; \
                         falling back to the screen domain"
                    );
                    ResolvedMode::ScreenPointer
                }
            }
            (Domain::Screen, Input::Pointer) => ResolvedMode::ScreenPointer,
        }
    }
}

fn check_finite_non_negative(field: &'static str, value: f32) -> TiltResult<()> {
    if !value.is_finite() {
        return Err(TiltError::InvalidField {
            field,
            detail: format!("{value} is not finite"),
        });
    }
    if value < 0.0 {
        return Err(TiltError::InvalidField {
            field,
            detail: format!("{value} is negative"),
        });
    }
    Ok(())
}

/// Operating mode fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedMode {
    /// Pointer input mapped against the whole screen.
    ScreenPointer,
    /// Pointer input mapped against the object's projected bounds.
    BoundsPointer,
    /// Accumulating axis input, clamped around the center rotation.
    ScreenAxes,
}

impl ResolvedMode {
    /// Whether this mode consumes pointer samples.
    #[must_use]
    pub fn uses_pointer(self) -> bool {
        matches!(self, Self::ScreenPointer | Self::BoundsPointer)
    }

    /// Whether this mode needs the object's projected bounds each tick.
    #[must_use]
    pub fn uses_bounds(self) -> bool {
        matches!(self, Self::BoundsPointer)
    }
}
