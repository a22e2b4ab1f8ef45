/*
 * Application Module
 *
 * This module defines the viewer's model and its per-frame update. Each
 * frame the parameter panel is drawn, the simulation advances one tick with
 * the panel's current values (unless paused), and the proxy scene is synced
 * for the renderer.
 *
 * Startup settings:
 * - first command-line argument: optional JSON file with a ParameterSet
 * - FLOCKING_SEED: seed for the initial placement
 * - FLOCKING_AGENTS: number of boids
 * - FLOCKING_MODE: "sequential" or "synchronized"
 */

use std::path::Path;

use anyhow::Context;
use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{error, info, warn};

use crate::camera::Camera;
use crate::debug::DebugInfo;
use crate::input;
use crate::params::{ParameterSet, ParameterSource, SimulationConfig, UpdateMode};
use crate::render::ProxyScene;
use crate::renderer;
use crate::simulation::Simulation;
use crate::ui::ParameterPanel;

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub panel: ParameterPanel,
    pub scene: ProxyScene,
    pub egui: Egui,
    pub camera: Camera,
    pub debug_info: DebugInfo,
    pub mouse_position: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("Boid Flocking Simulation")
        .size(1280, 800)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .mouse_wheel(input::mouse_wheel)
        .raw_event(input::raw_window_event)
        .build()
        .expect("Failed to build window");

    let window = app.window(window_id).expect("Window was just created");
    let egui = Egui::from_window(&window);

    let params = startup_params();
    let config = startup_config();
    let simulation = Simulation::new(&config, params).expect("Startup parameters are validated");

    // Far enough back to see the whole box
    let camera = Camera::new(params.bounds.max_element() * 2.5);

    let mut scene = ProxyScene::new();
    simulation.publish(&mut scene);

    Model {
        simulation,
        panel: ParameterPanel::new(params),
        scene,
        egui,
        camera,
        debug_info: DebugInfo::default(),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    model.egui.set_elapsed_time(update.since_start);
    model.panel.show(&mut model.egui, &model.debug_info);

    let step_requested = model.panel.take_step_request();
    let mut ticks = 0;

    if !model.panel.paused || step_requested {
        match model.simulation.step(&mut model.panel) {
            Ok(()) => model.panel.clear_rejection(),
            Err(err) => {
                // Keep the flock moving with the last accepted parameters
                model.panel.report_rejection(&err);
                model.simulation.tick();
            }
        }
        ticks = 1;
    } else if let Err(err) = model.simulation.apply_params(model.panel.sample()) {
        model.panel.report_rejection(&err);
    }

    model.simulation.publish(&mut model.scene);

    model.debug_info.ticks_this_frame = ticks;
    model.debug_info.stats = model.simulation.stats();
}

fn startup_params() -> ParameterSet {
    let Some(path) = std::env::args().nth(1) else {
        return ParameterSet::default();
    };

    match load_params(Path::new(&path)) {
        Ok(params) => {
            info!(%path, "loaded parameters");
            params
        }
        Err(err) => {
            error!("{:#}", err);
            warn!("falling back to default parameters");
            ParameterSet::default()
        }
    }
}

pub fn load_params(path: &Path) -> anyhow::Result<ParameterSet> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read parameter file {}", path.display()))?;
    let params: ParameterSet = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse parameter file {}", path.display()))?;
    params
        .validate()
        .with_context(|| format!("invalid parameters in {}", path.display()))?;
    Ok(params)
}

fn startup_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();

    if let Some(seed) = env_value::<u64>("FLOCKING_SEED") {
        config.seed = Some(seed);
    }
    if let Some(agents) = env_value::<usize>("FLOCKING_AGENTS") {
        config.agent_count = agents;
    }
    if let Ok(mode) = std::env::var("FLOCKING_MODE") {
        match mode.as_str() {
            "sequential" => config.mode = UpdateMode::Sequential,
            "synchronized" => config.mode = UpdateMode::Synchronized,
            other => warn!(mode = other, "unknown FLOCKING_MODE, using sequential"),
        }
    }

    config
}

fn env_value<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(name, value = %raw, "ignoring unparsable environment variable");
            None
        }
    }
}
