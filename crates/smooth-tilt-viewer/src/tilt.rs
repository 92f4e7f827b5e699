//! Bevy adapter for the tilt effect.
//!
//! Each frame: sample pointer or named axes, project the object's bounds when
//! the bounds domain is active, feed the controller, and smooth the entity's
//! `Transform` toward the returned target.

use bevy::camera::primitives::Aabb;
use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use glam::EulerRot;
use smooth_tilt::{
    Domain, InputSample, ScreenRect, TiltController, aabb_corners, screen_rect_of,
    step_orientation,
};

use crate::axes::NamedAxes;

/// Plugin wiring the tilt pipeline into the `Update` schedule.
pub struct TiltEffectPlugin;

impl Plugin for TiltEffectPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TiltDebugSettings>()
            .add_message::<RecenterTilt>()
            .add_systems(
                Update,
                (initialize_tilt, sync_config, handle_recenter, apply_tilt).chain(),
            )
            .add_systems(PostUpdate, draw_bounds);
    }
}

/// Attach the tilt effect to an entity with a `Transform`.
///
/// The controller is created lazily on the first tick, capturing the
/// entity's rotation at that moment as the center baseline. `config` stays
/// editable afterwards; changes rebuild the controller around the same
/// center.
#[derive(Component)]
pub struct TiltEffect {
    /// Requested configuration, editable at runtime.
    pub config: smooth_tilt::TiltConfig,
    controller: Option<TiltController>,
    init_grace: u8,
    disabled: bool,
}

impl TiltEffect {
    /// Create an effect with the given configuration.
    #[must_use]
    pub fn new(config: smooth_tilt::TiltConfig) -> Self {
        Self {
            config,
            controller: None,
            // Mesh Aabbs are computed at the end of the first frame; hold
            // the bounds-capability check until they can exist.
            init_grace: 2,
            disabled: false,
        }
    }

    /// The running controller, once initialized.
    #[must_use]
    pub fn controller(&self) -> Option<&TiltController> {
        self.controller.as_ref()
    }
}

/// Explicit rectangular surface for the bounds domain, in local space.
///
/// Stands in for a UI rect: entities without a renderable `Aabb` can still
/// use the bounds domain by declaring their interactive surface directly.
#[derive(Component, Debug, Clone, Copy)]
pub struct TiltSurface {
    /// Half width/height of the rect in the entity's local XY plane.
    pub half_size: Vec2,
}

impl TiltSurface {
    /// The four corners of the rect in world space.
    #[must_use]
    pub fn world_corners(&self, transform: &GlobalTransform) -> [Vec3; 4] {
        let e = self.half_size;
        [(-e.x, -e.y), (e.x, -e.y), (-e.x, e.y), (e.x, e.y)]
            .map(|(x, y)| transform.transform_point(Vec3::new(x, y, 0.0)))
    }
}

/// Re-baseline a tilt effect around a new orientation (Euler degrees,
/// pitch/yaw/roll).
#[derive(Message)]
pub struct RecenterTilt {
    pub entity: Entity,
    pub orientation: Vec3,
}

/// Debug visualization toggles.
#[derive(Resource, Default)]
pub struct TiltDebugSettings {
    /// Draw the world-space box whose projection forms the mapping domain.
    pub draw_bounds: bool,
}

/// Euler degrees (pitch, yaw, roll) of a rotation, in the controller's
/// convention.
fn euler_degrees(rotation: Quat) -> Vec3 {
    let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
    Vec3::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees())
}

/// Create controllers for freshly added effects.
///
/// Performs the one-time capability checks: a bounds domain without an
/// `Aabb` or `TiltSurface` falls back to the screen domain (inside
/// `TiltConfig::resolve`), and unresolvable axis names are reported here,
/// where the axis registry lives.
fn initialize_tilt(
    mut query: Query<(
        Entity,
        &mut TiltEffect,
        &Transform,
        Option<&Aabb>,
        Option<&TiltSurface>,
    )>,
) {
    for (entity, mut effect, transform, aabb, surface) in &mut query {
        if effect.disabled || effect.controller.is_some() {
            continue;
        }
        let has_bounds_source = aabb.is_some() || surface.is_some();
        if effect.config.domain == Domain::ObjectBounds
            && !has_bounds_source
            && effect.init_grace > 0
        {
            effect.init_grace -= 1;
            continue;
        }

        if effect.config.input == smooth_tilt::Input::Axes {
            for name in [&effect.config.horizontal_axis, &effect.config.vertical_axis] {
                if !NamedAxes::is_known(name) {
                    tracing::warn!(axis = %name, "axis name does not resolve to any input");
                }
            }
        }

        let center = euler_degrees(transform.rotation);
        match TiltController::new(effect.config.clone(), center, has_bounds_source) {
            Ok(controller) => {
                tracing::info!(?entity, mode = ?controller.mode(), "tilt effect initialized");
                effect.controller = Some(controller);
            }
            Err(err) => {
                tracing::error!(?entity, %err, "invalid tilt configuration; effect disabled");
                effect.disabled = true;
            }
        }
    }
}

/// Rebuild controllers whose requested configuration changed.
///
/// The center baseline carries over. A change that fails validation is
/// rejected and the stored configuration reverts to the controller's.
fn sync_config(
    mut query: Query<(Entity, &mut TiltEffect, Option<&Aabb>, Option<&TiltSurface>)>,
) {
    for (entity, mut effect, aabb, surface) in &mut query {
        let Some(controller) = effect.controller.as_ref() else {
            continue;
        };
        if effect.config == *controller.config() {
            continue;
        }
        let center = controller.center();
        let previous = controller.config().clone();
        let has_bounds_source = aabb.is_some() || surface.is_some();
        match TiltController::new(effect.config.clone(), center, has_bounds_source) {
            Ok(controller) => effect.controller = Some(controller),
            Err(err) => {
                tracing::warn!(?entity, %err, "rejecting tilt configuration change");
                effect.config = previous;
            }
        }
    }
}

/// Apply queued recenter requests.
fn handle_recenter(
    mut messages: MessageReader<RecenterTilt>,
    mut query: Query<&mut TiltEffect>,
) {
    for message in messages.read() {
        let Ok(mut effect) = query.get_mut(message.entity) else {
            continue;
        };
        if let Some(controller) = effect.controller.as_mut() {
            controller.recenter(message.orientation);
        }
    }
}

/// One tick of the pipeline for every tilt entity.
#[allow(clippy::needless_pass_by_value, clippy::type_complexity)]
fn apply_tilt(
    time: Res<Time>,
    window: Single<&Window, With<PrimaryWindow>>,
    camera: Single<(&Camera, &GlobalTransform)>,
    axes: NamedAxes,
    mut query: Query<(
        &mut TiltEffect,
        &mut Transform,
        &GlobalTransform,
        Option<&Aabb>,
        Option<&TiltSurface>,
    )>,
) {
    let (camera, camera_transform) = *camera;

    for (mut effect, mut transform, global, aabb, surface) in &mut query {
        let smoothness = effect.config.smoothness;
        let Some(controller) = effect.controller.as_mut() else {
            continue;
        };

        let domain = if controller.mode().uses_bounds() {
            projected_bounds(camera, camera_transform, global, aabb, surface)
                // An unprojectable box reads as a degenerate domain, which
                // the controller treats as no input.
                .unwrap_or(ScreenRect::new(Vec2::ZERO, Vec2::ZERO))
        } else {
            ScreenRect::screen(window.width(), window.height())
        };

        let sample = if controller.mode().uses_pointer() {
            match window.cursor_position() {
                Some(position) => InputSample::Pointer { position },
                None => InputSample::NoPointer,
            }
        } else {
            InputSample::axes(
                axes.value(&controller.config().horizontal_axis),
                axes.value(&controller.config().vertical_axis),
            )
        };

        let target = controller.target(sample, domain);
        transform.rotation =
            step_orientation(transform.rotation, target, smoothness, time.delta_secs());
    }
}

/// Screen-space min/max of the entity's bounds, corner by corner.
fn projected_bounds(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    global: &GlobalTransform,
    aabb: Option<&Aabb>,
    surface: Option<&TiltSurface>,
) -> Option<ScreenRect> {
    let project = |point: Vec3| camera.world_to_viewport(camera_transform, point).ok();
    if let Some(surface) = surface {
        screen_rect_of(surface.world_corners(global), project)
    } else if let Some(aabb) = aabb {
        let corners = aabb_corners(Vec3::from(aabb.center), Vec3::from(aabb.half_extents))
            .map(|corner| global.transform_point(corner));
        screen_rect_of(corners, project)
    } else {
        None
    }
}

/// Draw the world-space box behind the mapping domain.
#[allow(clippy::needless_pass_by_value)]
fn draw_bounds(
    settings: Res<TiltDebugSettings>,
    mut gizmos: Gizmos,
    query: Query<(&TiltEffect, &GlobalTransform, Option<&Aabb>, Option<&TiltSurface>)>,
) {
    if !settings.draw_bounds {
        return;
    }
    let color = Color::from(bevy::color::palettes::css::YELLOW);
    for (effect, global, aabb, surface) in &query {
        let uses_bounds = effect
            .controller()
            .is_some_and(|controller| controller.mode().uses_bounds());
        if !uses_bounds {
            continue;
        }
        if let Some(surface) = surface {
            let corners = surface.world_corners(global);
            // Corner order is (-,-), (+,-), (-,+), (+,+); trace the outline.
            gizmos.linestrip(
                [corners[0], corners[1], corners[3], corners[2], corners[0]],
                color,
            );
        } else if let Some(aabb) = aabb {
            let box_transform = Transform::from_matrix(global.to_matrix()).mul_transform(
                Transform::from_translation(Vec3::from(aabb.center))
                    .with_scale(Vec3::from(aabb.half_extents) * 2.0),
            );
            gizmos.cube(box_transform, color);
        }
    }
}
