//! Screen-space mapping domains and bounds projection.

use glam::{Vec2, Vec3};

/// An axis-aligned screen-space rectangle used as the mapping domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScreenRect {
    /// Construct from explicit corners.
    #[must_use]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// The rectangle `[0, width] x [0, height]`, the whole-screen domain.
    #[must_use]
    pub fn screen(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    /// Axis-aligned min/max of a set of screen-space points.
    ///
    /// Returns `None` for an empty set.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Whether the point lies strictly inside the rectangle.
    ///
    /// Strict comparisons: a pointer exactly on an edge counts as outside
    /// and triggers the reset-to-center path.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.y > self.min.y && point.y < self.max.y
    }

    /// Whether the rectangle has zero (or negative) extent on either axis.
    ///
    /// A degenerate domain would divide by zero in the range mapping, so
    /// the controller treats it as "no input".
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max.x - self.min.x <= 0.0 || self.max.y - self.min.y <= 0.0
    }
}

/// The eight corners of an axis-aligned box given its center and half extents.
#[must_use]
pub fn aabb_corners(center: Vec3, half_extents: Vec3) -> [Vec3; 8] {
    let e = half_extents;
    [
        center + Vec3::new(-e.x, -e.y, -e.z),
        center + Vec3::new(e.x, -e.y, -e.z),
        center + Vec3::new(-e.x, -e.y, e.z),
        center + Vec3::new(e.x, -e.y, e.z),
        center + Vec3::new(-e.x, e.y, -e.z),
        center + Vec3::new(e.x, e.y, -e.z),
        center + Vec3::new(-e.x, e.y, e.z),
        center + Vec3::new(e.x, e.y, e.z),
    ]
}

/// Project world-space points into screen space and take their axis-aligned
/// min/max.
///
/// Each point is projected individually, so the result accounts for camera
/// perspective and for the object's own rotation and scale. `project` is the
/// camera capability (world point to screen point); it may decline a point
/// (behind the camera), in which case the whole domain is unusable and
/// `None` is returned.
pub fn screen_rect_of(
    points: impl IntoIterator<Item = Vec3>,
    mut project: impl FnMut(Vec3) -> Option<Vec2>,
) -> Option<ScreenRect> {
    let mut projected = Vec::new();
    for point in points {
        projected.push(project(point)?);
    }
    ScreenRect::from_points(projected)
}
