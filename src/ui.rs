/*
 * UI Module
 *
 * This module contains the egui parameter panel. The panel edits its own
 * working copy of the ParameterSet and hands it to the simulation through
 * the ParameterSource trait; it never touches the simulation directly.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::error::ConfigError;
use crate::params::{ParameterSet, ParameterSource};

pub struct ParameterPanel {
    params: ParameterSet,
    pub paused: bool,
    step_requested: bool,
    last_rejection: Option<String>,
}

impl ParameterPanel {
    pub fn new(params: ParameterSet) -> Self {
        Self {
            params,
            paused: false,
            step_requested: false,
            last_rejection: None,
        }
    }

    // Returns true once after the "Step" button was clicked
    pub fn take_step_request(&mut self) -> bool {
        std::mem::take(&mut self.step_requested)
    }

    pub fn report_rejection(&mut self, err: &ConfigError) {
        self.last_rejection = Some(err.to_string());
    }

    pub fn clear_rejection(&mut self) {
        self.last_rejection = None;
    }

    pub fn show(&mut self, egui: &mut Egui, debug_info: &DebugInfo) {
        let ctx = egui.begin_frame();
        let params = &mut self.params;

        egui::Window::new("Simulation Controls")
            .default_pos([10.0, 10.0])
            .show(&ctx, |ui| {
                ui.collapsing("Flocking Behavior", |ui| {
                    ui.add(egui::Slider::new(&mut params.cohesion_weight, ParameterSet::get_cohesion_weight_range()).text("Cohesion Weight"));
                    ui.add(egui::Slider::new(&mut params.separation_weight, ParameterSet::get_separation_weight_range()).text("Separation Weight"));
                    ui.add(egui::Slider::new(&mut params.alignment_weight, ParameterSet::get_alignment_weight_range()).text("Alignment Weight"));
                    ui.add(egui::Slider::new(&mut params.visual_range, ParameterSet::get_visual_range_range()).text("Visual Range"));
                    ui.add(egui::Slider::new(&mut params.separation_radius, ParameterSet::get_separation_radius_range()).text("Separation Radius"));
                    ui.add(egui::Slider::new(&mut params.speed_limit, ParameterSet::get_speed_limit_range()).text("Speed Limit"));
                });

                ui.collapsing("Bounds", |ui| {
                    ui.add(egui::Slider::new(&mut params.bounds.x, ParameterSet::get_bounds_range()).text("Half Width"));
                    ui.add(egui::Slider::new(&mut params.bounds.y, ParameterSet::get_bounds_range()).text("Half Height"));
                    ui.add(egui::Slider::new(&mut params.bounds.z, ParameterSet::get_bounds_range()).text("Half Depth"));
                    ui.add(egui::Slider::new(&mut params.boundary_push, ParameterSet::get_boundary_push_range()).text("Boundary Push"));
                    ui.checkbox(&mut params.show_bounds, "Show Bounding Box");
                });

                ui.collapsing("Flock Stats", |ui| {
                    let stats = &debug_info.stats;
                    ui.label(format!("FPS: {:.1}", debug_info.fps));
                    ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                    ui.label(format!("Boids: {}", stats.agents));
                    ui.label(format!("Ticks: {} ({} this frame)", stats.ticks, debug_info.ticks_this_frame));
                    ui.label(format!("Mean speed: {:.4}", stats.mean_speed));
                    ui.label(format!("Max speed: {:.4}", stats.max_speed));
                    ui.label(format!(
                        "Centroid: ({:.2}, {:.2}, {:.2})",
                        stats.centroid.x, stats.centroid.y, stats.centroid.z
                    ));
                });

                ui.checkbox(&mut self.paused, "Pause Simulation");
                if ui.button("Step").clicked() {
                    self.step_requested = true;
                }

                if let Some(message) = &self.last_rejection {
                    ui.colored_label(egui::Color32::RED, format!("Rejected: {}", message));
                }
            });
    }
}

impl ParameterSource for ParameterPanel {
    fn sample(&mut self) -> ParameterSet {
        self.params
    }
}
