//! The unified per-tick input sample.

use glam::Vec2;

/// One tick's worth of input, produced by the platform adapter.
///
/// Platform differences (mouse vs. touch, gamepad vs. keyboard axes) are
/// resolved by the adapter; the core only ever sees one of these variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputSample {
    /// An active pointer or touch at this screen-space position.
    Pointer { position: Vec2 },
    /// No active pointer; on touch platforms this means no finger is down.
    NoPointer,
    /// Raw values of the two configured axes, nominally in `[-1, 1]`.
    Axes { horizontal: f32, vertical: f32 },
}

impl InputSample {
    /// Convenience constructor for pointer samples.
    #[must_use]
    pub fn pointer(x: f32, y: f32) -> Self {
        Self::Pointer {
            position: Vec2::new(x, y),
        }
    }

    /// Convenience constructor for axis samples.
    #[must_use]
    pub fn axes(horizontal: f32, vertical: f32) -> Self {
        Self::Axes {
            horizontal,
            vertical,
        }
    }
}
