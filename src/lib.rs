/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure of the flocking crate. The core
 * (boids, parameters, neighbor query, rules, physics, simulation, render
 * boundary) is headless; the nannou viewer modules are only built with the
 * `viewer` feature.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use debug::{DebugInfo, FlockStats};
pub use error::ConfigError;
pub use glam::Vec3;
pub use params::{ParameterSet, ParameterSource, SimulationConfig, UpdateMode};
pub use render::{BoundsBox, BoundsHandle, ProxyScene, RenderAdapter};
pub use simulation::Simulation;

// Define modules
pub mod boid;
pub mod debug;
pub mod error;
pub mod neighbors;
pub mod params;
pub mod physics;
pub mod render;
pub mod rules;
pub mod simulation;

#[cfg(feature = "viewer")]
pub mod app;
#[cfg(feature = "viewer")]
pub mod camera;
#[cfg(feature = "viewer")]
pub mod input;
#[cfg(feature = "viewer")]
pub mod renderer;
#[cfg(feature = "viewer")]
pub mod ui;
