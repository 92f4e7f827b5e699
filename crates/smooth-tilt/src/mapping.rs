//! Linear range mapping.

/// Map `value` from the range `[from_min, from_max]` to `[to_min, to_max]`.
///
/// The output ranges may be reversed (`to_min > to_max`), which is how axis
/// inversion swaps which input edge maps to which rotation extreme.
///
/// The input range must be non-degenerate; callers guard with
/// [`ScreenRect::is_degenerate`](crate::bounds::ScreenRect::is_degenerate)
/// before mapping.
#[must_use]
pub fn map_range(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    (value - from_min) / (from_max - from_min) * (to_max - to_min) + to_min
}
