/*
 * Boid Flocking Simulation
 *
 * Interactive 3D viewer for the flocking core. Every boid follows the
 * classic rules (cohesion, separation, alignment) plus a soft boundary and
 * a speed limit; the panel on the left tunes them live.
 *
 * Set RUST_LOG (e.g. RUST_LOG=flocking=debug) to control log output.
 */

use flocking::app;
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    nannou::app(app::model).update(app::update).run();
}
