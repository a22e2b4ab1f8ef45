/*
 * Renderer Module
 *
 * This module draws the proxy scene through the orbit camera: one yellow
 * disc per boid, scaled by depth and painted back to front, and the edges
 * of the boundary box while the scene holds a bounds handle.
 */

use nannou::prelude::*;
use tracing::error;

use crate::app::Model;
use crate::camera::Camera;

// World-space radius of a boid disc
const BOID_RADIUS: f32 = 0.05;

pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();

    if let Some(bounds) = model.scene.bounds() {
        let half = bounds.half_extents;
        draw_bounds(&draw, &model.camera, vec3(half.x, half.y, half.z), window_rect);
    }

    let mut projected: Vec<(Vec2, f32)> = model
        .scene
        .proxies()
        .iter()
        .filter_map(|p| model.camera.project(vec3(p.x, p.y, p.z), window_rect))
        .collect();

    // Smaller scale means further away; draw those first
    projected.sort_by(|a, b| a.1.total_cmp(&b.1));

    for (screen_pos, scale) in projected {
        draw.ellipse()
            .xy(screen_pos)
            .radius((BOID_RADIUS * scale).max(1.0))
            .color(YELLOW);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        error!(?err, "failed to draw frame");
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        error!(?err, "failed to draw egui");
    }
}

// The twelve edges of the box [-half, half]
fn draw_bounds(draw: &Draw, camera: &Camera, half: Vec3, window_rect: Rect) {
    let corner = |i: usize| {
        vec3(
            if i & 1 == 0 { -half.x } else { half.x },
            if i & 2 == 0 { -half.y } else { half.y },
            if i & 4 == 0 { -half.z } else { half.z },
        )
    };

    for a in 0..8 {
        for axis in [1, 2, 4] {
            let b = a | axis;
            if b == a {
                continue;
            }

            let start = camera.project(corner(a), window_rect);
            let end = camera.project(corner(b), window_rect);
            if let (Some((start, _)), Some((end, _))) = (start, end) {
                draw.line()
                    .start(start)
                    .end(end)
                    .weight(1.0)
                    .color(rgba(0.5, 0.5, 0.5, 1.0));
            }
        }
    }
}
