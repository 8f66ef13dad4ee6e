use bevy::prelude::*;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin}; // fps
use bevy::pbr::wireframe::WireframeConfig;
use bevy_egui::{egui, EguiContexts, EguiPlugin, EguiPrimaryContextPass};
use std::ops::RangeInclusive;

use crate::config::*;
use crate::systems::export::ExportEvent;
use crate::systems::preset::SavePresetEvent;
use crate::systems::tower::{CurveKind, RebuildEvent, ResetEvent, ShapeKind, TowerState, TwistAxis};

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        assert!(app.is_plugin_added::<EguiPlugin>());
        app
            .add_systems(EguiPrimaryContextPass, (ui_main, fps)); // UI rendering here
    }
}

fn range((min, max): (f32, f32)) -> RangeInclusive<f32> {
    min..=max
}

// curve picker, returns true when the selection changed
fn curve_combo(ui: &mut egui::Ui, id: &str, curve: &mut CurveKind) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(curve.name())
        .show_ui(ui, |ui| {
            for kind in CurveKind::ALL {
                changed |= ui.selectable_value(curve, kind, kind.name()).changed();
            }
        });
    changed
}

fn shape_combo(ui: &mut egui::Ui, id: &str, shape: &mut ShapeKind) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(shape.name())
        .show_ui(ui, |ui| {
            for kind in ShapeKind::ALL {
                changed |= ui.selectable_value(shape, kind, kind.name()).changed();
            }
        });
    changed
}

fn twist_axis(ui: &mut egui::Ui, label: &str, axis: &mut TwistAxis) -> bool {
    let mut changed = false;
    ui.label(label);
    changed |= ui.add(egui::Slider::new(&mut axis.min, range(TWIST_RANGE))
        .text("Min")
        .suffix("°"))
        .changed();
    changed |= ui.add(egui::Slider::new(&mut axis.max, range(TWIST_RANGE))
        .text("Max")
        .suffix("°"))
        .changed();
    ui.horizontal(|ui| {
        ui.label("Curve:");
        changed |= curve_combo(ui, &format!("twist_curve_{label}"), &mut axis.curve);
    });
    changed
}

fn ui_main(
    mut contexts: EguiContexts,
    mut state: ResMut<TowerState>,
    mut rebuild_events: EventWriter<RebuildEvent>,
    mut reset_events: EventWriter<ResetEvent>,
    mut preset_events: EventWriter<SavePresetEvent>,
    mut export_events: EventWriter<ExportEvent>,
    mut wireframe: ResMut<WireframeConfig>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("tower_controls")
        .default_width(300.0)
        .min_width(250.0)
        .max_width(400.0)
        .resizable(true)
        .show(ctx, |ui| {
            let mut rebuild = false;
            let params = &mut state.params;

            ui.heading("Tower Controls");

            // camera
            ui.label("Camera: ");
            ui.label("WASD - Move");
            ui.label("Scroll - Zoom");
            ui.label("MMB / QE - Rotate");

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::CollapsingHeader::new("Layout")
                    .default_open(true)
                    .show(ui, |ui| {
                    let (min_floors, max_floors) = FLOOR_COUNT_RANGE;
                    rebuild |= ui.add(egui::Slider::new(&mut params.floor_count, min_floors..=max_floors)
                        .text("Floors"))
                        .changed();
                    rebuild |= ui.add(egui::Slider::new(&mut params.floor_height, range(FLOOR_HEIGHT_RANGE))
                        .text("Floor Height (m)")
                        .suffix(" m"))
                        .on_hover_text("Vertical spacing between slabs.")
                        .changed();
                    rebuild |= ui.add(egui::Slider::new(&mut params.slab_width, range(SLAB_SIZE_RANGE))
                        .text("Slab Width (m)")
                        .suffix(" m"))
                        .changed();
                    rebuild |= ui.add(egui::Slider::new(&mut params.slab_depth, range(SLAB_SIZE_RANGE))
                        .text("Slab Depth (m)")
                        .suffix(" m"))
                        .changed();
                    rebuild |= ui.add(egui::Slider::new(&mut params.slab_thickness, range(SLAB_THICKNESS_RANGE))
                        .text("Slab Thickness (m)")
                        .suffix(" m"))
                        .changed();
                });

                egui::CollapsingHeader::new("Shape")
                    .default_open(true)
                    .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Bottom:");
                        rebuild |= shape_combo(ui, "shape_bottom", &mut params.shape_bottom);
                    });
                    ui.horizontal(|ui| {
                        ui.label("Top:");
                        rebuild |= shape_combo(ui, "shape_top", &mut params.shape_top);
                    });
                    ui.horizontal(|ui| {
                        ui.label("Curve:");
                        rebuild |= curve_combo(ui, "shape_curve", &mut params.shape_curve);
                    });
                });

                egui::CollapsingHeader::new("Twist Gradient")
                    .default_open(true)
                    .show(ui, |ui| {
                    rebuild |= twist_axis(ui, "X", &mut params.twist_x);
                    ui.add_space(4.0);
                    rebuild |= twist_axis(ui, "Y", &mut params.twist_y);
                    ui.add_space(4.0);
                    rebuild |= twist_axis(ui, "Z", &mut params.twist_z);
                });

                egui::CollapsingHeader::new("Scale Gradient")
                    .default_open(true)
                    .show(ui, |ui| {
                    rebuild |= ui.add(egui::Slider::new(&mut params.scale_min, range(SCALE_RANGE))
                        .text("Min"))
                        .changed();
                    rebuild |= ui.add(egui::Slider::new(&mut params.scale_max, range(SCALE_RANGE))
                        .text("Max"))
                        .changed();
                    ui.horizontal(|ui| {
                        ui.label("Curve:");
                        rebuild |= curve_combo(ui, "scale_curve", &mut params.scale_curve);
                    });
                });

                egui::CollapsingHeader::new("Bend")
                    .default_open(true)
                    .show(ui, |ui| {
                    rebuild |= ui.add(egui::Slider::new(&mut params.bend_angle_degrees, range(BEND_ANGLE_RANGE))
                        .text("Angle")
                        .suffix("°"))
                        .on_hover_text("Total angle swept by the tower's spine.")
                        .changed();
                    rebuild |= ui.add(egui::Slider::new(&mut params.bend_direction_degrees, range(BEND_DIRECTION_RANGE))
                        .text("Direction")
                        .suffix("°"))
                        .on_hover_text("Heading of the bend plane around the vertical axis.")
                        .changed();
                    ui.horizontal(|ui| {
                        ui.label("Curve:");
                        rebuild |= curve_combo(ui, "bend_curve", &mut params.bend_curve);
                    });
                });

                egui::CollapsingHeader::new("Color")
                    .default_open(true)
                    .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Bottom:");
                        rebuild |= ui.color_edit_button_rgb(&mut params.color_bottom).changed();
                    });
                    ui.horizontal(|ui| {
                        ui.label("Top:");
                        rebuild |= ui.color_edit_button_rgb(&mut params.color_top).changed();
                    });
                });

                egui::CollapsingHeader::new("Material")
                    .default_open(true)
                    .show(ui, |ui| {
                    rebuild |= ui.add(egui::Slider::new(&mut params.roughness, 0.0..=1.0)
                        .text("Roughness"))
                        .changed();
                    rebuild |= ui.add(egui::Slider::new(&mut params.metalness, 0.0..=1.0)
                        .text("Metalness"))
                        .changed();
                    ui.checkbox(&mut wireframe.global, "Wireframe")
                        .on_hover_text("Overlay mesh edges on every slab");
                });
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Reset")
                    .on_hover_text("Restore the startup parameters")
                    .clicked() {
                    reset_events.write(ResetEvent);
                }
                if ui.button("Save Preset")
                    .on_hover_text(format!("Write the current parameters to {PRESET_PATH}"))
                    .clicked() {
                    preset_events.write(SavePresetEvent);
                }
                if ui.button("Export OBJ")
                    .on_hover_text("Export the tower as an OBJ file, current directory")
                    .clicked() {
                    let timestamp = std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .map(|d| d.as_secs())
                        .unwrap_or_default();
                    export_events.write(ExportEvent { filename: format!("tower_export_{}.obj", timestamp) });
                }
            });

            ui.separator();
            ui.label(format!("Floors: {}", state.tower().len()));
            ui.label("ESC - Exit");

            // trigger a rebuild on any parameter change
            if rebuild {
                rebuild_events.write(RebuildEvent);
            }
        });
}

fn fps(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
) {
    if let Ok(ctx) = contexts.ctx_mut() {
        egui::Area::new(egui::Id::new("fps_counter"))
            .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-10.0, 10.0))
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::RIGHT), |ui| {
                    if let Some(fps) = diagnostics
                        .get(&FrameTimeDiagnosticsPlugin::FPS)
                        .and_then(|fps| fps.smoothed())
                    {
                        ui.label(egui::RichText::new(format!("{:.0}", fps))
                            .size(26.0)
                            .color(egui::Color32::WHITE));
                    }
                });
            });
    }
}
