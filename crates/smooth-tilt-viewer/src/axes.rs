//! Named-axis input source.
//!
//! Resolves the axis names carried by a tilt configuration to concrete
//! inputs: the gamepad left stick, with a keyboard fallback (WASD and
//! arrow keys). This plays the role of the engine-side axis registry the
//! core deliberately does not own.

use bevy::ecs::system::SystemParam;
use bevy::input::gamepad::{Gamepad, GamepadAxis};
use bevy::prelude::*;

/// The axis name driving yaw.
pub const HORIZONTAL: &str = "Horizontal";
/// The axis name driving pitch.
pub const VERTICAL: &str = "Vertical";

/// Read-only access to every input source an axis name can resolve to.
#[derive(SystemParam)]
pub struct NamedAxes<'w, 's> {
    gamepads: Query<'w, 's, &'static Gamepad>,
    keyboard: Res<'w, ButtonInput<KeyCode>>,
}

impl NamedAxes<'_, '_> {
    /// Whether `name` resolves to an input here.
    ///
    /// Used for the one-time configuration check; an unresolvable name is
    /// the adapter's error to surface, not the core's.
    #[must_use]
    pub fn is_known(name: &str) -> bool {
        matches!(name, HORIZONTAL | VERTICAL)
    }

    /// Current raw value of the named axis, in `[-1, 1]`.
    ///
    /// Unknown names read as zero.
    #[must_use]
    pub fn value(&self, name: &str) -> f32 {
        let raw = match name {
            HORIZONTAL => {
                self.stick(GamepadAxis::LeftStickX)
                    + self.key_pair(
                        &[KeyCode::KeyD, KeyCode::ArrowRight],
                        &[KeyCode::KeyA, KeyCode::ArrowLeft],
                    )
            }
            VERTICAL => {
                self.stick(GamepadAxis::LeftStickY)
                    + self.key_pair(
                        &[KeyCode::KeyW, KeyCode::ArrowUp],
                        &[KeyCode::KeyS, KeyCode::ArrowDown],
                    )
            }
            other => {
                tracing::debug!(axis = other, "unresolvable axis name reads as zero");
                0.0
            }
        };
        raw.clamp(-1.0, 1.0)
    }

    /// Sum of the given stick axis over all connected gamepads.
    fn stick(&self, axis: GamepadAxis) -> f32 {
        self.gamepads
            .iter()
            .filter_map(|gamepad| gamepad.get(axis))
            .sum()
    }

    /// +1 while any positive key is held, -1 for any negative key.
    fn key_pair(&self, positive: &[KeyCode], negative: &[KeyCode]) -> f32 {
        let mut value = 0.0;
        if positive.iter().any(|&key| self.keyboard.pressed(key)) {
            value += 1.0;
        }
        if negative.iter().any(|&key| self.keyboard.pressed(key)) {
            value -= 1.0;
        }
        value
    }
}
