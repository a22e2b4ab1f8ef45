/*
 * Physics Module
 *
 * The kinematic half of a tick: add a steering delta to a boid's velocity,
 * clamp its speed, then move it by the clamped velocity. There is no mass,
 * no time step and no collision handling.
 */

use glam::Vec3;

use crate::boid::Boid;

// Rescale `velocity` to exactly `speed_limit` when it is faster; zero stays zero.
// Always returns a finite vector.
pub fn limit_speed(velocity: Vec3, speed_limit: f32) -> Vec3 {
    if !velocity.is_finite() {
        // Only the infinite components carry direction; NaN carries none
        let axis = |c: f32| if c.is_infinite() { c.signum() } else { 0.0 };
        let direction = Vec3::new(axis(velocity.x), axis(velocity.y), axis(velocity.z));
        if direction == Vec3::ZERO {
            return Vec3::ZERO;
        }
        return direction.normalize() * speed_limit;
    }

    // Dividing by the largest component first keeps length() from
    // overflowing for very large but finite inputs
    let scale = velocity.abs().max_element();
    if scale == 0.0 {
        return velocity;
    }

    let scaled = velocity / scale;
    let speed = scaled.length() * scale;
    if speed <= speed_limit {
        return velocity;
    }

    scaled.normalize() * speed_limit
}

// Steps 2 to 4 of the per-agent update
pub fn integrate(boid: &mut Boid, delta: Vec3, speed_limit: f32) {
    boid.velocity = limit_speed(boid.velocity + delta, speed_limit);
    boid.position += boid.velocity;
}
