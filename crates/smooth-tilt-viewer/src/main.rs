//! Demo application for the smooth-tilt effect.
//!
//! Spawns a panel that tilts toward the pointer, with a debug window for
//! switching modes and editing the configuration live.

mod axes;
mod tilt;
mod ui;

use bevy::prelude::*;
use smooth_tilt::{Domain, TiltConfig};
use tilt::{TiltEffect, TiltEffectPlugin, TiltSurface};
use ui::TiltUiPlugin;

/// Plugin for the main application.
pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((TiltEffectPlugin, TiltUiPlugin))
            .add_systems(Startup, setup_scene);
    }
}

/// Set up the camera, a light, and the tilting panel.
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(3.0, 5.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // The panel maps the pointer against its own projected bounds; the
    // debug window can switch it to whole-screen or axes input.
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(3.0, 2.0, 0.1))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.2, 0.5, 0.8),
            ..Default::default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
        TiltEffect::new(TiltConfig {
            domain: Domain::ObjectBounds,
            tilt_range: 10.0,
            smoothness: 5.0,
            ..TiltConfig::default()
        }),
        TiltSurface {
            half_size: Vec2::new(1.5, 1.0),
        },
    ));

    tracing::info!("Scene setup complete - move the pointer over the panel to tilt it");
}

fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "smooth-tilt-viewer".to_string(),
                resolution: (1280, 720).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins(AppPlugin)
        .run();
}
