/*
 * Debug Information Module
 *
 * This module defines the FlockStats summary computed by the simulation
 * and the DebugInfo struct shown in the viewer's panel.
 *
 * Includes metrics for:
 * - FPS (frames per second) and frame time
 * - Ticks run so far and ticks run in the last frame
 * - Mean and maximum boid speed
 * - Flock centroid
 */

use std::time::Duration;

use glam::Vec3;

use crate::boid::Boid;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlockStats {
    pub agents: usize,
    pub ticks: u64,
    pub mean_speed: f32,
    pub max_speed: f32,
    pub centroid: Vec3,
}

impl FlockStats {
    pub fn collect(boids: &[Boid], ticks: u64) -> Self {
        if boids.is_empty() {
            return Self {
                ticks,
                ..Self::default()
            };
        }

        let mut speed_sum = 0.0;
        let mut max_speed: f32 = 0.0;
        let mut centroid = Vec3::ZERO;

        for boid in boids {
            let speed = boid.speed();
            speed_sum += speed;
            max_speed = max_speed.max(speed);
            centroid += boid.position;
        }

        let n = boids.len() as f32;
        Self {
            agents: boids.len(),
            ticks,
            mean_speed: speed_sum / n,
            max_speed,
            centroid: centroid / n,
        }
    }
}

// Debug information to display
#[derive(Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_this_frame: usize,
    pub stats: FlockStats,
}
