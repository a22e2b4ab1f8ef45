/*
 * Camera Module
 *
 * This module defines the orbit Camera used by the viewer. The camera
 * circles the origin at a given distance, rotated by yaw and pitch, and
 * projects world points onto the window with a perspective divide.
 * Dragging rotates the camera; the mouse wheel moves it closer or further.
 */

use nannou::prelude::*;

// Points closer than this to the camera plane are not drawn
const NEAR_PLANE: f32 = 0.1;
const MAX_PITCH: f32 = 1.5;

pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov_y: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub is_dragging: bool,
    pub last_cursor_pos: Vec2,
}

impl Camera {
    pub fn new(distance: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance,
            fov_y: 75.0_f32.to_radians(),
            min_distance: 0.5,
            max_distance: 100.0,
            is_dragging: false,
            last_cursor_pos: Vec2::ZERO,
        }
    }

    // Rotate a world point into camera space; the camera looks down -z
    fn to_view(&self, point: Vec3) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let x = cos_yaw * point.x - sin_yaw * point.z;
        let z = sin_yaw * point.x + cos_yaw * point.z;

        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let y = cos_pitch * point.y - sin_pitch * z;
        let z = sin_pitch * point.y + cos_pitch * z;

        vec3(x, y, z - self.distance)
    }

    /// Screen position of `point` and the pixels-per-world-unit scale at its
    /// depth, or `None` if it is behind the near plane.
    pub fn project(&self, point: Vec3, window_rect: Rect) -> Option<(Vec2, f32)> {
        let view = self.to_view(point);
        let depth = -view.z;
        if depth < NEAR_PLANE {
            return None;
        }

        let focal_length = (window_rect.h() / 2.0) / (self.fov_y / 2.0).tan();
        let scale = focal_length / depth;
        Some((vec2(view.x, view.y) * scale + window_rect.xy(), scale))
    }

    // Handle mouse wheel events for zooming
    pub fn zoom(&mut self, scroll_delta: Vec2) {
        let zoom_factor = 1.0 - scroll_delta.y * 0.1;
        self.distance = (self.distance * zoom_factor).clamp(self.min_distance, self.max_distance);
    }

    pub fn start_drag(&mut self, position: Vec2) {
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Dragging orbits the camera around the origin
    pub fn drag(&mut self, position: Vec2) {
        if !self.is_dragging {
            return;
        }

        let delta = position - self.last_cursor_pos;
        if delta.length_squared() > 0.0 {
            self.yaw += delta.x * 0.01;
            self.pitch = (self.pitch - delta.y * 0.01).clamp(-MAX_PITCH, MAX_PITCH);
            self.last_cursor_pos = position;
        }
    }

    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }
}
