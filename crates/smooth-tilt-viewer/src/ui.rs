//! Debug UI for inspecting and editing the tilt effect.
//!
//! Shows the resolved mode and live pitch/yaw, and exposes the
//! configuration fields with conditional visibility: axis fields only
//! appear with axes input, and the bounds-domain toggle hides when axes
//! input is selected.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};
use smooth_tilt::{Domain, Input};

use crate::axes;
use crate::tilt::{RecenterTilt, TiltDebugSettings, TiltEffect};

/// Plugin for the tilt debug/config window.
pub struct TiltUiPlugin;

impl Plugin for TiltUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_systems(EguiPrimaryContextPass, tilt_ui_system);
    }
}

/// Render the tilt window for every effect entity.
#[allow(clippy::needless_pass_by_value, clippy::too_many_lines)]
fn tilt_ui_system(
    mut contexts: EguiContexts,
    mut debug_settings: ResMut<TiltDebugSettings>,
    mut recenter: MessageWriter<RecenterTilt>,
    mut query: Query<(Entity, &mut TiltEffect, &Transform)>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::Window::new("Tilt")
        .default_pos([10.0, 10.0])
        .show(ctx, |ui| {
            for (entity, mut effect, transform) in &mut query {
                ui.heading(format!("{entity:?}"));

                if let Some(controller) = effect.controller() {
                    ui.label(format!("Mode: {:?}", controller.mode()));
                    ui.label(format!(
                        "Target pitch/yaw: {:.2} / {:.2}",
                        controller.pitch(),
                        controller.yaw()
                    ));
                    let center = controller.center();
                    ui.label(format!(
                        "Center: ({:.1}, {:.1}, {:.1})",
                        center.x, center.y, center.z
                    ));
                } else {
                    ui.label("Mode: (not initialized)");
                }

                if ui.button("Recenter here").clicked() {
                    let (yaw, pitch, roll) =
                        transform.rotation.to_euler(glam::EulerRot::YXZ);
                    recenter.write(RecenterTilt {
                        entity,
                        orientation: Vec3::new(
                            pitch.to_degrees(),
                            yaw.to_degrees(),
                            roll.to_degrees(),
                        ),
                    });
                }

                ui.separator();

                let config = &mut effect.config;
                let mut use_axes = config.input == Input::Axes;
                if ui.checkbox(&mut use_axes, "Use axes").changed() {
                    config.input = if use_axes { Input::Axes } else { Input::Pointer };
                }

                // The bounds domain only applies to pointer input.
                if !use_axes {
                    let mut local = config.domain == Domain::ObjectBounds;
                    if ui.checkbox(&mut local, "Map against object bounds").changed() {
                        config.domain = if local {
                            Domain::ObjectBounds
                        } else {
                            Domain::Screen
                        };
                    }
                }

                ui.checkbox(&mut config.invert_x, "Invert X");
                ui.checkbox(&mut config.invert_y, "Invert Y");

                if use_axes {
                    ui.horizontal(|ui| {
                        ui.label("Horizontal axis:");
                        ui.text_edit_singleline(&mut config.horizontal_axis);
                    });
                    ui.horizontal(|ui| {
                        ui.label("Vertical axis:");
                        ui.text_edit_singleline(&mut config.vertical_axis);
                    });
                    ui.add(
                        egui::Slider::new(&mut config.horizontal_speed, 0.0..=5.0)
                            .text("Horizontal speed"),
                    );
                    ui.add(
                        egui::Slider::new(&mut config.vertical_speed, 0.0..=5.0)
                            .text("Vertical speed"),
                    );
                    ui.checkbox(&mut config.reset_on_no_input, "Reset on no input");
                }

                ui.add(egui::Slider::new(&mut config.smoothness, 0.0..=10.0).text("Smoothness"));
                ui.add(
                    egui::Slider::new(&mut config.tilt_range, 0.0..=45.0).text("Tilt range (deg)"),
                );

                ui.separator();
            }

            ui.checkbox(&mut debug_settings.draw_bounds, "Draw bounds");
            ui.label("Controls:");
            ui.label("  Move the pointer to tilt");
            ui.label(format!(
                "  {}/{} axes: left stick, WASD or arrows",
                axes::HORIZONTAL,
                axes::VERTICAL
            ));
        });

    Ok(())
}
